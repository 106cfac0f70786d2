//! Mermaid block extraction and diagram URL derivation.

use thiserror::Error;
use url::Url;

/// Opening marker of a Mermaid fenced block.
pub const MERMAID_FENCE: &str = "```mermaid";

/// Closing marker of any fenced block.
pub const CLOSING_FENCE: &str = "```";

/// Caption attached to rendered diagrams.
pub const DIAGRAM_CAPTION: &str = "Visual Diagram";

/// Failure to turn a response into a diagram URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagramError {
    #[error("no closing ``` found after the ```mermaid marker")]
    Unterminated,
    #[error("diagram source contains non-ASCII character {0:?}")]
    NonAscii(char),
}

/// Locate the first Mermaid block in `text`.
///
/// Returns `None` when there is no opening marker. The returned source is the
/// text strictly between the opening marker and the first closing fence after it.
pub fn extract_diagram_source(text: &str) -> Option<Result<&str, DiagramError>> {
    let start = text.find(MERMAID_FENCE)? + MERMAID_FENCE.len();
    let rest = &text[start..];
    Some(rest.find(CLOSING_FENCE).map(|end| &rest[..end]).ok_or(DiagramError::Unterminated))
}

/// Build `<base>/<hex(source)>`.
///
/// The source must be ASCII; the rendering service expects ASCII bytes.
pub fn diagram_url(base: &Url, source: &str) -> Result<String, DiagramError> {
    if let Some(c) = source.chars().find(|c| !c.is_ascii()) {
        return Err(DiagramError::NonAscii(c));
    }
    Ok(format!("{}/{}", base.as_str().trim_end_matches('/'), hex::encode(source.as_bytes())))
}
