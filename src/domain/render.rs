//! Turning a completion into display-ready output.

use url::Url;

use crate::domain::diagram::{self, DIAGRAM_CAPTION};
use crate::domain::{Completion, CompletionError, LearningMode};

/// Primary body of a rendered response.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// Model output, shown as markdown.
    Markdown(String),
    /// Completion failure, shown in the same place but styled as an error.
    Failure(CompletionError),
}

/// Supplementary diagram shown after the body in visual mode.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagramOutcome {
    Image { url: String, caption: String },
    Warning(String),
}

/// Everything the display layer needs for one response.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedResponse {
    pub mode: LearningMode,
    pub body: ResponseBody,
    pub diagram: Option<DiagramOutcome>,
}

impl RenderedResponse {
    pub fn is_failure(&self) -> bool {
        matches!(self.body, ResponseBody::Failure(_))
    }
}

/// Render a completion for `mode`.
///
/// The body is always present. Diagram extraction only runs for a successful
/// visual-mode answer, and any failure there degrades to a warning.
pub fn render_response(
    completion: Completion,
    mode: LearningMode,
    diagram_base: &Url,
) -> RenderedResponse {
    let text = match completion {
        Ok(text) => text,
        Err(err) => {
            return RenderedResponse { mode, body: ResponseBody::Failure(err), diagram: None };
        }
    };

    let diagram = match mode {
        LearningMode::Visual => diagram_outcome(&text, diagram_base),
        LearningMode::Explanation | LearningMode::Code => None,
    };

    RenderedResponse { mode, body: ResponseBody::Markdown(text), diagram }
}

fn diagram_outcome(text: &str, base: &Url) -> Option<DiagramOutcome> {
    let outcome = diagram::extract_diagram_source(text)?
        .and_then(|source| diagram::diagram_url(base, source))
        .map(|url| DiagramOutcome::Image { url, caption: DIAGRAM_CAPTION.to_string() })
        .unwrap_or_else(|err| {
            tracing::debug!(error = %err, "diagram extraction failed");
            DiagramOutcome::Warning(format!(
                "Could not render diagram directly ({err}), but here is the description:"
            ))
        });
    Some(outcome)
}
