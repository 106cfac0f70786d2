pub mod completion;
pub mod config;
pub mod diagram;
pub mod error;
pub mod mode;
pub mod prompt;
pub mod render;
pub mod topic;

pub use completion::{
    Completion, CompletionError, CompletionErrorKind, CompletionRequest, ERROR_PREFIX,
    model_chain,
};
pub use config::{
    AppConfig, CONFIG_FILE_NAME, CompletionConfig, DiagramConfig, LauncherConfig, ProcessSpec,
    parse_config_content,
};
pub use diagram::DiagramError;
pub use error::AppError;
pub use mode::{CodeComplexity, ExplanationDepth, LearningMode, ModeRequest};
pub use prompt::{Prompt, build_prompt};
pub use render::{DiagramOutcome, RenderedResponse, ResponseBody, render_response};
pub use topic::Topic;
