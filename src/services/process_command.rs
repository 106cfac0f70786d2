use std::process::{Child, Command};

use crate::domain::{AppError, ProcessSpec};
use crate::ports::{ChildProcess, ProcessSpawner};

/// Starts dev processes with `std::process::Command`, sharing this terminal's stdio.
#[derive(Debug, Clone, Default)]
pub struct CommandProcessSpawner;

impl CommandProcessSpawner {
    pub fn new() -> Self {
        Self
    }
}

/// A child started by [`CommandProcessSpawner`].
#[derive(Debug)]
pub struct CommandChild {
    name: String,
    child: Child,
}

impl ProcessSpawner for CommandProcessSpawner {
    type Child = CommandChild;

    fn spawn(&self, spec: &ProcessSpec) -> Result<CommandChild, AppError> {
        let child = Command::new(&spec.program).args(&spec.args).spawn().map_err(|e| {
            AppError::Launch {
                name: spec.name.clone(),
                details: format!("{} {}: {}", spec.program, spec.args.join(" "), e),
            }
        })?;
        tracing::debug!(name = %spec.name, pid = child.id(), "spawned dev process");
        Ok(CommandChild { name: spec.name.clone(), child })
    }
}

impl ChildProcess for CommandChild {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_exited(&mut self) -> Result<bool, AppError> {
        Ok(self.child.try_wait()?.is_some())
    }

    fn terminate(&mut self) -> Result<(), AppError> {
        if self.child.try_wait()?.is_some() {
            return Ok(());
        }
        self.child.kill().map_err(|e| AppError::Launch {
            name: self.name.clone(),
            details: format!("failed to stop: {}", e),
        })?;
        self.child.wait()?;
        Ok(())
    }
}
