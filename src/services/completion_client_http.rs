//! Chat-completions client implementation using reqwest.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{
    AppError, Completion, CompletionConfig, CompletionError, CompletionErrorKind,
    CompletionRequest, model_chain,
};
use crate::ports::CompletionClient;

/// HTTP client for an OpenAI-compatible chat-completions endpoint (Groq by default).
#[derive(Clone)]
pub struct HttpCompletionClient {
    api_key: String,
    api_url: Url,
    fallback_models: Vec<String>,
    client: Client,
}

impl std::fmt::Debug for HttpCompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCompletionClient")
            .field("api_url", &self.api_url)
            .field("fallback_models", &self.fallback_models)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpCompletionClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &CompletionConfig) -> Result<Self, AppError> {
        if api_key.trim().is_empty() {
            return Err(AppError::config_error("API key must not be empty"));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            api_url: config.api_url.clone(),
            fallback_models: config.fallback_models.clone(),
            client,
        })
    }

    /// Create from the environment variable named in `config`.
    ///
    /// There is no built-in key: a missing or blank variable is a configuration error.
    pub fn from_env(config: &CompletionConfig) -> Result<Self, AppError> {
        let var = &config.api_key_env;
        let api_key = std::env::var(var)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::config_error(format!("{var} environment variable not set"))
            })?;

        Self::new(api_key, config)
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: [ApiMessage<'a>; 1],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ApiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<ApiChoice>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ApiChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl CompletionClient for HttpCompletionClient {
    fn complete(&self, request: &CompletionRequest) -> Completion {
        let mut last_error = None;
        for model in model_chain(&request.model, &self.fallback_models) {
            tracing::info!(model, "requesting completion");
            match self.send_request(request, model) {
                Ok(text) => return Ok(text),
                Err(err) => {
                    tracing::info!(model, kind = %err.kind, error = %err.message, "model failed");
                    last_error = Some(err);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            CompletionError::new(CompletionErrorKind::Service, "no model attempted")
        }))
    }
}

impl HttpCompletionClient {
    fn send_request(&self, request: &CompletionRequest, model: &str) -> Completion {
        let body = ApiRequest {
            model,
            messages: [ApiMessage { role: "user", content: &request.prompt }],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let response = self
            .client
            .post(self.api_url.clone())
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .map_err(|e| {
                CompletionError::new(
                    CompletionErrorKind::Transport,
                    format!("HTTP request failed: {}", e),
                )
            })?;

        let status = response.status();

        if status.is_success() {
            let api_response: ApiResponse = response.json().map_err(|e| {
                CompletionError::new(
                    CompletionErrorKind::MalformedResponse,
                    format!("Failed to parse response: {}", e),
                )
            })?;

            let content = api_response
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.message.content)
                .ok_or_else(|| {
                    CompletionError::new(
                        CompletionErrorKind::MalformedResponse,
                        "No message content in response",
                    )
                })?;

            if content.trim().is_empty() {
                return Err(CompletionError::new(
                    CompletionErrorKind::EmptyResponse,
                    format!("Model '{}' returned empty content", model),
                ));
            }
            Ok(content)
        } else {
            let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            Err(Self::status_error(status, &error_text))
        }
    }

    fn status_error(status: StatusCode, body: &str) -> CompletionError {
        let kind = match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => CompletionErrorKind::Auth,
            StatusCode::TOO_MANY_REQUESTS => CompletionErrorKind::RateLimited,
            _ => CompletionErrorKind::Service,
        };
        CompletionError::new(kind, format!("API error ({}): {}", status.as_u16(), body.trim()))
    }
}
