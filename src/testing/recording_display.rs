use std::cell::RefCell;

use crate::domain::RenderedResponse;
use crate::ports::ResponseDisplay;

#[derive(Default)]
pub struct RecordingDisplay {
    pub shown: RefCell<Vec<RenderedResponse>>,
    pub prompts: RefCell<Vec<String>>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResponseDisplay for RecordingDisplay {
    fn show(&self, response: &RenderedResponse) {
        self.shown.borrow_mut().push(response.clone());
    }

    fn show_prompt(&self, prompt: &str) {
        self.prompts.borrow_mut().push(prompt.to_string());
    }
}
