use crate::domain::RenderedResponse;

/// Port for presenting a rendered response to the user.
pub trait ResponseDisplay {
    /// Show the body and any diagram outcome of `response`.
    fn show(&self, response: &RenderedResponse);

    /// Show a prompt that was built but not sent.
    fn show_prompt(&self, prompt: &str);
}
