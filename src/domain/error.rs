use std::io;

use thiserror::Error;

/// Library-wide error type for learnsphere operations.
///
/// Completion failures are values of
/// [`CompletionError`](crate::domain::CompletionError) and never appear here.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// A mode option name that does not belong to the selected mode.
    #[error("Invalid {mode} option '{value}': expected one of {expected}")]
    InvalidOption { mode: String, value: String, expected: String },

    /// An embedded prompt template failed to render.
    #[error("Prompt template '{template}' failed to render: {reason}")]
    PromptRender { template: String, reason: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A dev process could not be started or stopped.
    #[error("Failed to launch '{name}': {details}")]
    Launch { name: String, details: String },

    /// Interactive prompt failed (no terminal, aborted input).
    #[error("Interactive input failed: {0}")]
    Interactive(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers that classify failures.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidOption { .. }
            | AppError::TomlParse(_) => io::ErrorKind::InvalidInput,
            AppError::PromptRender { .. } => io::ErrorKind::InvalidData,
            AppError::Launch { .. } | AppError::Interactive(_) => io::ErrorKind::Other,
        }
    }
}
