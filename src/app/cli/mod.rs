//! CLI Adapter.

use std::io::{ErrorKind, IsTerminal};
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use dialoguer::{Error as DialoguerError, Input};
use tracing_subscriber::EnvFilter;

use crate::app::api::{self, DispatchOutcome, GenerateOptions, StopReason, TriggerAction};
use crate::domain::{AppError, CodeComplexity, ExplanationDepth, ModeRequest};

/// Exit code used when the completion service call failed.
const EXIT_COMPLETION_FAILED: i32 = 2;

#[derive(Parser)]
#[command(name = "learnsphere")]
#[command(version)]
#[command(
    about = "Generate ML explanations, code examples, and diagrams with a hosted LLM",
    long_about = None
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GenerateArgs {
    /// Machine-learning topic; asked for interactively when omitted
    topic: Vec<String>,
    /// Override the configured model
    #[arg(short, long)]
    model: Option<String>,
    /// Print the prompt without sending it
    #[arg(long)]
    dry_run: bool,
    /// Config file (defaults to ./learnsphere.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a structured text explanation
    #[clap(visible_alias = "e")]
    Explain {
        #[command(flatten)]
        args: GenerateArgs,
        /// Explanation depth: brief, moderate, comprehensive
        #[arg(short, long, default_value = "moderate")]
        depth: ExplanationDepth,
    },
    /// Generate an executable Python example
    #[clap(visible_alias = "c")]
    Code {
        #[command(flatten)]
        args: GenerateArgs,
        /// Code complexity: simple, moderate, advanced
        #[arg(short = 'x', long, default_value = "moderate")]
        complexity: CodeComplexity,
    },
    /// Generate a visual mental model with a Mermaid diagram
    #[clap(visible_alias = "v")]
    Visual {
        #[command(flatten)]
        args: GenerateArgs,
    },
    /// Launch the local dev processes and wait on them
    Dev {
        /// Config file (defaults to ./learnsphere.toml)
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<i32, AppError> = match cli.command {
        Commands::Explain { args, depth } => run_generate(ModeRequest::Explanation(depth), args),
        Commands::Code { args, complexity } => run_generate(ModeRequest::Code(complexity), args),
        Commands::Visual { args } => run_generate(ModeRequest::Visual, args),
        Commands::Dev { config } => run_dev(config),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_generate(request: ModeRequest, args: GenerateArgs) -> Result<i32, AppError> {
    let topic = resolve_topic(args.topic)?;
    let action = TriggerAction { request, topic, model: args.model };
    let options = GenerateOptions { config_path: args.config.as_deref(), dry_run: args.dry_run };

    match api::generate(action, options)? {
        DispatchOutcome::Skipped => {
            eprintln!("ℹ️  Enter a topic to generate {} content.", request.mode());
            Ok(0)
        }
        DispatchOutcome::Preview(_) => Ok(0),
        DispatchOutcome::Rendered(rendered) if rendered.is_failure() => Ok(EXIT_COMPLETION_FAILED),
        DispatchOutcome::Rendered(_) => Ok(0),
    }
}

/// Join topic words, or ask for the topic when none were given on a terminal.
fn resolve_topic(words: Vec<String>) -> Result<String, AppError> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    if !std::io::stdin().is_terminal() {
        return Ok(String::new());
    }

    let answer = Input::<String>::new()
        .with_prompt("Enter a Machine Learning Topic")
        .allow_empty(true)
        .interact_text();
    topic_from_prompt(answer)
}

/// A cancelled prompt yields an empty topic, which makes the action a no-op.
fn topic_from_prompt(answer: Result<String, DialoguerError>) -> Result<String, AppError> {
    match answer {
        Ok(topic) => Ok(topic),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(String::new()),
        Err(err) => Err(AppError::Interactive(err.to_string())),
    }
}

fn run_dev(config: Option<PathBuf>) -> Result<i32, AppError> {
    let outcome = api::dev(config.as_deref())?;
    match outcome.reason {
        StopReason::Interrupted => Ok(0),
        StopReason::Exited(_) => Ok(1),
    }
}
