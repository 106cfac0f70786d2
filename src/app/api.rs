//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::app::commands::{dev, generate};
use crate::app::{AppContext, config};
use crate::domain::AppConfig;
use crate::services::{
    CommandProcessSpawner, EmbeddedPromptTemplates, HttpCompletionClient, TerminalDisplay,
};

pub use crate::app::commands::dev::{StopReason, SupervisionOutcome};
pub use crate::app::commands::generate::{DispatchOutcome, TriggerAction};
pub use crate::domain::{AppError, ModeRequest};

/// Options shared by the generate commands.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions<'a> {
    /// Explicit config file; `learnsphere.toml` in the working directory otherwise.
    pub config_path: Option<&'a Path>,
    /// Build and print the prompt without sending it.
    pub dry_run: bool,
}

fn load_config(config_path: Option<&Path>) -> Result<AppConfig, AppError> {
    config::load_config(config_path, &std::env::current_dir()?)
}

/// Handle one trigger action against the configured completion service.
///
/// The credential is read only when a request will actually be sent, so a dry run
/// or an empty topic works without it.
pub fn generate(
    action: TriggerAction,
    options: GenerateOptions<'_>,
) -> Result<DispatchOutcome, AppError> {
    let config = load_config(options.config_path)?;
    let templates = EmbeddedPromptTemplates::new();
    let display = TerminalDisplay::new();

    if options.dry_run {
        return generate::preview(&templates, &display, action.request, action.topic);
    }
    if action.topic.is_empty() {
        return Ok(DispatchOutcome::Skipped);
    }

    let client = HttpCompletionClient::from_env(&config.completion)?;
    let ctx = AppContext::new(config, client, display, templates);
    generate::dispatch(&ctx, action)
}

/// Start the configured dev processes and wait until one exits or Ctrl+C is pressed.
pub fn dev(config_path: Option<&Path>) -> Result<SupervisionOutcome, AppError> {
    let config = load_config(config_path)?;

    println!("🚀 Starting LearnSphere dev environment...");
    let key_var = &config.completion.api_key_env;
    if std::env::var(key_var).map(|v| v.trim().is_empty()).unwrap_or(true) {
        println!("⚠️  Warning: {} not found in environment variables.", key_var);
        println!("💡 Export {} before generating content.", key_var);
    }

    let interrupt = Arc::new(AtomicBool::new(false));
    {
        let interrupt = interrupt.clone();
        ctrlc::set_handler(move || interrupt.store(true, Ordering::SeqCst)).map_err(|e| {
            AppError::Launch { name: "interrupt handler".to_string(), details: e.to_string() }
        })?;
    }

    let outcome = dev::supervise(
        &CommandProcessSpawner::new(),
        &config.launcher.processes,
        &interrupt,
        Duration::from_millis(config.launcher.poll_interval_ms),
    )?;
    println!("👋 Goodbye!");
    Ok(outcome)
}
