mod completion_client_http;
mod embedded_prompt_templates;
mod process_command;
mod terminal_display;

pub use completion_client_http::HttpCompletionClient;
pub use embedded_prompt_templates::EmbeddedPromptTemplates;
pub use process_command::{CommandChild, CommandProcessSpawner};
pub use terminal_display::TerminalDisplay;
