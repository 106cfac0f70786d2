use crate::domain::LearningMode;
use crate::ports::PromptTemplateStore;

/// Uses one template source for every mode.
pub struct StaticPromptTemplates {
    source: String,
}

impl StaticPromptTemplates {
    pub fn new(source: impl Into<String>) -> Self {
        Self { source: source.into() }
    }
}

impl PromptTemplateStore for StaticPromptTemplates {
    fn template(&self, _mode: LearningMode) -> Option<&str> {
        Some(&self.source)
    }

    fn template_name(&self, _mode: LearningMode) -> &str {
        "static"
    }
}
