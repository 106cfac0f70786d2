//! Configuration domain models loaded from `learnsphere.toml`.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;
use crate::domain::completion::{
    DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE, model_chain,
};

/// Default config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "learnsphere.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub completion: CompletionConfig,
    #[serde(default)]
    pub diagram: DiagramConfig,
    #[serde(default)]
    pub launcher: LauncherConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.completion.validate()?;
        self.launcher.validate()?;
        Ok(())
    }
}

/// Completion service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompletionConfig {
    /// Chat-completions endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Primary model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// Models tried in order after the primary one fails.
    #[serde(default)]
    pub fallback_models: Vec<String>,
    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum generated tokens.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key_env: default_api_key_env(),
            model: default_model(),
            fallback_models: Vec::new(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout(),
        }
    }
}

impl CompletionConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.api_key_env.trim().is_empty() {
            return Err(AppError::config_error("completion.api_key_env must not be empty"));
        }
        if self.model.trim().is_empty() {
            return Err(AppError::config_error("completion.model must not be empty"));
        }
        if self.fallback_models.iter().any(|m| m.trim().is_empty()) {
            return Err(AppError::config_error(
                "completion.fallback_models must not contain empty names",
            ));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(AppError::config_error("completion.temperature must be between 0 and 2"));
        }
        if self.max_tokens == 0 {
            return Err(AppError::config_error("completion.max_tokens must be greater than 0"));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("completion.timeout_secs must be greater than 0"));
        }
        Ok(())
    }

    /// Primary model followed by the fallbacks, without duplicates.
    pub fn model_chain(&self) -> Vec<String> {
        model_chain(&self.model, &self.fallback_models).into_iter().map(String::from).collect()
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.groq.com/openai/v1/chat/completions")
        .expect("Default API URL must be valid")
}

fn default_api_key_env() -> String {
    "GROQ_API_KEY".to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

fn default_timeout() -> u64 {
    120
}

/// Diagram rendering service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiagramConfig {
    /// Base URL the hex-encoded diagram source is appended to.
    #[serde(default = "default_diagram_base_url")]
    pub base_url: Url,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self { base_url: default_diagram_base_url() }
    }
}

fn default_diagram_base_url() -> Url {
    Url::parse("https://mermaid.ink/img").expect("Default diagram URL must be valid")
}

/// A dev process started by `learnsphere dev`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProcessSpec {
    /// Display name.
    pub name: String,
    /// Executable to run.
    pub program: String,
    /// Arguments passed to the executable.
    #[serde(default)]
    pub args: Vec<String>,
    /// Address printed once the process is started.
    #[serde(default)]
    pub url: Option<String>,
}

/// Dev launcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LauncherConfig {
    /// Liveness poll interval in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Processes to supervise.
    #[serde(default = "default_processes")]
    pub processes: Vec<ProcessSpec>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self { poll_interval_ms: default_poll_interval_ms(), processes: default_processes() }
    }
}

impl LauncherConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.poll_interval_ms == 0 {
            return Err(AppError::config_error("launcher.poll_interval_ms must be greater than 0"));
        }
        if self.processes.is_empty() {
            return Err(AppError::config_error("launcher.processes must not be empty"));
        }
        for spec in &self.processes {
            if spec.name.trim().is_empty() || spec.program.trim().is_empty() {
                return Err(AppError::config_error(
                    "launcher.processes entries need a non-empty name and program",
                ));
            }
        }
        Ok(())
    }
}

fn default_poll_interval_ms() -> u64 {
    1000
}

fn default_processes() -> Vec<ProcessSpec> {
    vec![
        ProcessSpec {
            name: "Python AI Lab".to_string(),
            program: "streamlit".to_string(),
            args: vec!["run".to_string(), "app.py".to_string()],
            url: Some("http://localhost:8501".to_string()),
        },
        ProcessSpec {
            name: "Main Frontend".to_string(),
            program: if cfg!(windows) { "npm.cmd" } else { "npm" }.to_string(),
            args: vec!["run".to_string(), "dev".to_string()],
            url: Some("http://localhost:3000".to_string()),
        },
    ]
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
