//! Completion service port definition.

use crate::domain::{Completion, CompletionRequest};

/// Port for text-completion operations.
///
/// Implementations must report every failure through the returned
/// [`Completion`]; they never panic on transport or service errors.
pub trait CompletionClient {
    /// Send one prompt and return the generated text or a tagged failure.
    fn complete(&self, request: &CompletionRequest) -> Completion;
}
