//! Child process port used by the dev launcher.

use crate::domain::{AppError, ProcessSpec};

/// A running child process.
pub trait ChildProcess {
    /// Configured name of this child.
    fn name(&self) -> &str;

    /// `Ok(true)` once the process has exited.
    fn has_exited(&mut self) -> Result<bool, AppError>;

    /// Ask the process to stop and wait for it.
    fn terminate(&mut self) -> Result<(), AppError>;
}

/// Port for starting child processes.
pub trait ProcessSpawner {
    type Child: ChildProcess;

    fn spawn(&self, spec: &ProcessSpec) -> Result<Self::Child, AppError>;
}
