mod completion_client;
mod process_spawner;
mod prompt_template_store;
mod response_display;

pub use completion_client::CompletionClient;
pub use process_spawner::{ChildProcess, ProcessSpawner};
pub use prompt_template_store::PromptTemplateStore;
pub use response_display::ResponseDisplay;
