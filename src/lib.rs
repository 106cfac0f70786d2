//! learnsphere: turn a machine-learning topic into an explanation, a code example,
//! or a diagram using a hosted chat-completion model.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    DispatchOutcome, GenerateOptions, StopReason, SupervisionOutcome, TriggerAction, dev, generate,
};
pub use domain::{
    AppError, CodeComplexity, Completion, CompletionError, CompletionErrorKind, CompletionRequest,
    DiagramOutcome, ExplanationDepth, LearningMode, ModeRequest, Prompt, RenderedResponse,
    ResponseBody, Topic,
};
pub use ports::{CompletionClient, ResponseDisplay};

/// Build the prompt for `request` and `topic` from the embedded templates.
///
/// Returns `None` for an empty topic.
pub fn build_prompt(request: ModeRequest, topic: &str) -> Result<Option<Prompt>, AppError> {
    let Some(topic) = Topic::new(topic) else {
        return Ok(None);
    };
    domain::build_prompt(&services::EmbeddedPromptTemplates::new(), request, &topic).map(Some)
}
