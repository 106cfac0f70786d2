use crate::domain::AppConfig;
use crate::ports::{CompletionClient, PromptTemplateStore, ResponseDisplay};

/// Application context holding dependencies for one trigger action.
pub struct AppContext<C: CompletionClient, D: ResponseDisplay, T: PromptTemplateStore> {
    config: AppConfig,
    client: C,
    display: D,
    templates: T,
}

impl<C: CompletionClient, D: ResponseDisplay, T: PromptTemplateStore> AppContext<C, D, T> {
    /// Create a new application context.
    pub fn new(config: AppConfig, client: C, display: D, templates: T) -> Self {
        Self { config, client, display, templates }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the completion client.
    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Get a reference to the prompt template store.
    pub fn templates(&self) -> &T {
        &self.templates
    }
}
