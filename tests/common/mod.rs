//! Shared testing utilities for learnsphere CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const COMPLETIONS_PATH: &str = "/openai/v1/chat/completions";

/// Testing harness providing an isolated working directory for CLI runs.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for the compiled binary without any API key in its environment.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("learnsphere").expect("Failed to locate learnsphere binary");
        cmd.current_dir(&self.work_dir).env_remove("GROQ_API_KEY").env_remove("RUST_LOG");
        cmd
    }

    /// Build a command that carries a test API key.
    pub fn cli_with_key(&self) -> Command {
        let mut cmd = self.cli();
        cmd.env("GROQ_API_KEY", "gsk_test");
        cmd
    }

    /// Write `learnsphere.toml` in the work directory.
    pub fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("learnsphere.toml"), content)
            .expect("Failed to write learnsphere.toml");
    }

    /// Point the completion client at a mock server.
    pub fn use_server(&self, server: &mockito::Server) {
        self.write_config(&format!(
            "[completion]\napi_url = \"{}{}\"\ntimeout_secs = 5\n",
            server.url(),
            COMPLETIONS_PATH
        ));
    }
}

/// JSON body of a successful chat completion carrying `content`.
#[allow(dead_code)]
pub fn completion_body(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
    .to_string()
}
