use include_dir::{Dir, include_dir};

use crate::domain::LearningMode;
use crate::ports::PromptTemplateStore;

static PROMPTS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/prompts");

/// Prompt templates compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedPromptTemplates;

impl EmbeddedPromptTemplates {
    pub fn new() -> Self {
        Self
    }
}

impl PromptTemplateStore for EmbeddedPromptTemplates {
    fn template(&self, mode: LearningMode) -> Option<&str> {
        PROMPTS_DIR.get_file(self.template_name(mode)).and_then(|file| file.contents_utf8())
    }

    fn template_name(&self, mode: LearningMode) -> &str {
        match mode {
            LearningMode::Explanation => "explanation.j2",
            LearningMode::Code => "code.j2",
            LearningMode::Visual => "visual.j2",
        }
    }
}
