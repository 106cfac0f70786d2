//! Completion request and tagged result types.

use std::fmt;

use thiserror::Error;

/// Prefix shown in front of every completion failure.
pub const ERROR_PREFIX: &str = "Error generation content: ";

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default upper bound on generated tokens.
pub const DEFAULT_MAX_TOKENS: u32 = 8000;

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// A single-turn request to the completion service.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Prompt sent as the only user message.
    pub prompt: String,
    /// Model identifier.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum number of generated tokens.
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Build a request with the default decoding parameters.
    pub fn new(prompt: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: model.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

/// `primary` followed by `fallbacks`, each model listed once.
pub fn model_chain<'a>(primary: &'a str, fallbacks: &'a [String]) -> Vec<&'a str> {
    let mut chain = vec![primary];
    for model in fallbacks {
        if !chain.contains(&model.as_str()) {
            chain.push(model);
        }
    }
    chain
}

/// Category of a completion failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompletionErrorKind {
    /// Connection, DNS, TLS, or timeout failure.
    Transport,
    /// Credential rejected (401/403).
    Auth,
    /// Provider rate limit (429).
    RateLimited,
    /// Any other non-success status.
    Service,
    /// Response body could not be decoded.
    MalformedResponse,
    /// Response decoded but carried no text.
    EmptyResponse,
}

impl CompletionErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionErrorKind::Transport => "transport",
            CompletionErrorKind::Auth => "auth",
            CompletionErrorKind::RateLimited => "rate_limited",
            CompletionErrorKind::Service => "service",
            CompletionErrorKind::MalformedResponse => "malformed_response",
            CompletionErrorKind::EmptyResponse => "empty_response",
        }
    }
}

impl fmt::Display for CompletionErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed completion, carried as a value rather than raised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}{}", ERROR_PREFIX, .message)]
pub struct CompletionError {
    pub kind: CompletionErrorKind,
    pub message: String,
}

impl CompletionError {
    pub fn new(kind: CompletionErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }
}

/// Outcome of one completion call: generated text or a tagged failure.
pub type Completion = Result<String, CompletionError>;
