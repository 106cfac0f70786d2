mod fake_completion_client;
mod fake_process;
mod recording_display;
mod static_prompt_templates;

pub use fake_completion_client::FakeCompletionClient;
pub use fake_process::FakeSpawner;
pub use recording_display::RecordingDisplay;
pub use static_prompt_templates::StaticPromptTemplates;
