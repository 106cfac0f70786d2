//! Trigger-action dispatch: prompt → completion → render → display.

use crate::app::AppContext;
use crate::domain::{
    AppError, CompletionRequest, ModeRequest, Prompt, RenderedResponse, Topic, build_prompt,
    render_response,
};
use crate::ports::{CompletionClient, PromptTemplateStore, ResponseDisplay};

/// One user trigger: a mode with its option, the raw topic, and an optional model override.
#[derive(Debug, Clone)]
pub struct TriggerAction {
    pub request: ModeRequest,
    pub topic: String,
    pub model: Option<String>,
}

/// What a trigger action produced.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// Topic was empty; nothing was built or sent.
    Skipped,
    /// Prompt was built and shown but not sent.
    Preview(Prompt),
    /// The completion was rendered and displayed (successfully or as a failure).
    Rendered(RenderedResponse),
}

/// Run the full pipeline for `action`.
///
/// Completion failures are displayed and returned inside the outcome; only local
/// problems such as a broken template produce `Err`.
pub fn dispatch<C, D, T>(
    ctx: &AppContext<C, D, T>,
    action: TriggerAction,
) -> Result<DispatchOutcome, AppError>
where
    C: CompletionClient,
    D: ResponseDisplay,
    T: PromptTemplateStore,
{
    if action.model.as_ref().is_some_and(|model| model.trim().is_empty()) {
        return Err(AppError::config_error("model override must not be empty"));
    }
    let Some(topic) = Topic::new(action.topic) else {
        tracing::debug!("empty topic, skipping dispatch");
        return Ok(DispatchOutcome::Skipped);
    };

    let prompt = build_prompt(ctx.templates(), action.request, &topic)?;
    let settings = &ctx.config().completion;
    let request = CompletionRequest {
        prompt: prompt.content,
        model: action.model.unwrap_or_else(|| settings.model.clone()),
        temperature: settings.temperature,
        max_tokens: settings.max_tokens,
    };

    tracing::info!(mode = prompt.mode.id(), model = %request.model, "dispatching prompt");
    let completion = ctx.client().complete(&request);

    let rendered = render_response(completion, prompt.mode, &ctx.config().diagram.base_url);
    ctx.display().show(&rendered);
    Ok(DispatchOutcome::Rendered(rendered))
}

/// Build and show the prompt for `request` without contacting the service.
pub fn preview<D, T>(
    templates: &T,
    display: &D,
    request: ModeRequest,
    topic: String,
) -> Result<DispatchOutcome, AppError>
where
    D: ResponseDisplay,
    T: PromptTemplateStore,
{
    let Some(topic) = Topic::new(topic) else {
        return Ok(DispatchOutcome::Skipped);
    };

    let prompt = build_prompt(templates, request, &topic)?;
    display.show_prompt(&prompt.content);
    Ok(DispatchOutcome::Preview(prompt))
}
