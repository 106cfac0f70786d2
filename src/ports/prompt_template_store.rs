use crate::domain::LearningMode;

/// Port for accessing the prompt template of each learning mode.
pub trait PromptTemplateStore {
    /// Template source for `mode`, if the store has one.
    fn template(&self, mode: LearningMode) -> Option<&str>;

    /// Name used when reporting render errors.
    fn template_name(&self, mode: LearningMode) -> &str;
}
