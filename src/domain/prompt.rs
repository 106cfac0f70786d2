//! Prompt construction from a mode request and topic.

use minijinja::{AutoEscape, Environment, UndefinedBehavior, Value, context};

use crate::domain::{AppError, LearningMode, ModeRequest, Topic};
use crate::ports::PromptTemplateStore;

/// A prompt ready to send to the completion service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub mode: LearningMode,
    pub content: String,
}

/// Render the template for `request`, inserting `topic` verbatim.
///
/// The topic is passed as a value, never as template source, so braces in user
/// input are not interpreted.
pub fn build_prompt<T>(
    templates: &T,
    request: ModeRequest,
    topic: &Topic,
) -> Result<Prompt, AppError>
where
    T: PromptTemplateStore + ?Sized,
{
    let mode = request.mode();
    let name = templates.template_name(mode);
    let source = templates.template(mode).ok_or_else(|| AppError::PromptRender {
        template: name.to_string(),
        reason: "template not found".to_string(),
    })?;

    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_auto_escape_callback(|_| AutoEscape::None);

    let ctx = template_context(request, topic);
    let content = env.render_str(source, ctx).map_err(|err| AppError::PromptRender {
        template: name.to_string(),
        reason: err.to_string(),
    })?;

    Ok(Prompt { mode, content })
}

fn template_context(request: ModeRequest, topic: &Topic) -> Value {
    match request {
        ModeRequest::Explanation(depth) => {
            context! { topic => topic.as_str(), depth => depth.label() }
        }
        ModeRequest::Code(complexity) => {
            context! { topic => topic.as_str(), complexity => complexity.label() }
        }
        ModeRequest::Visual => context! { topic => topic.as_str() },
    }
}
