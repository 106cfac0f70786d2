use std::sync::{Arc, Mutex};

use crate::domain::{Completion, CompletionRequest};
use crate::ports::CompletionClient;

#[derive(Clone)]
pub struct FakeCompletionClient {
    pub requests: Arc<Mutex<Vec<CompletionRequest>>>,
    pub response: Completion,
}

impl FakeCompletionClient {
    pub fn new(response: Completion) -> Self {
        Self { requests: Arc::new(Mutex::new(vec![])), response }
    }

    pub fn replying(text: impl Into<String>) -> Self {
        Self::new(Ok(text.into()))
    }

    pub fn get_requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl CompletionClient for FakeCompletionClient {
    fn complete(&self, request: &CompletionRequest) -> Completion {
        self.requests.lock().unwrap().push(request.clone());
        self.response.clone()
    }
}
