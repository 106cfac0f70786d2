use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::{AppError, ProcessSpec};
use crate::ports::{ChildProcess, ProcessSpawner};

/// Shared log of what happened to fake children, keyed by process name.
#[derive(Debug, Default)]
pub struct ProcessLog {
    pub spawned: Vec<String>,
    pub terminated: Vec<String>,
    pub polls: HashMap<String, u32>,
}

/// Spawner whose children exit after a scripted number of polls.
#[derive(Clone, Default)]
pub struct FakeSpawner {
    exit_after_polls: HashMap<String, u32>,
    failing: Vec<String>,
    interrupt_on_exit: Option<Arc<AtomicBool>>,
    pub log: Rc<RefCell<ProcessLog>>,
}

impl FakeSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Child `name` reports exit on its `polls`-th liveness check.
    pub fn exits_after(mut self, name: &str, polls: u32) -> Self {
        self.exit_after_polls.insert(name.to_string(), polls);
        self
    }

    /// Raise `flag` whenever a child reports its exit, as a Ctrl+C reaching the children would.
    pub fn interrupts_on_exit(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt_on_exit = Some(flag);
        self
    }

    /// Spawning `name` fails.
    pub fn fails_to_spawn(mut self, name: &str) -> Self {
        self.failing.push(name.to_string());
        self
    }
}

pub struct FakeChild {
    name: String,
    exit_after: Option<u32>,
    terminated: bool,
    interrupt_on_exit: Option<Arc<AtomicBool>>,
    log: Rc<RefCell<ProcessLog>>,
}

impl ProcessSpawner for FakeSpawner {
    type Child = FakeChild;

    fn spawn(&self, spec: &ProcessSpec) -> Result<FakeChild, AppError> {
        if self.failing.contains(&spec.name) {
            return Err(AppError::Launch {
                name: spec.name.clone(),
                details: "not found".to_string(),
            });
        }
        self.log.borrow_mut().spawned.push(spec.name.clone());
        Ok(FakeChild {
            name: spec.name.clone(),
            exit_after: self.exit_after_polls.get(&spec.name).copied(),
            terminated: false,
            interrupt_on_exit: self.interrupt_on_exit.clone(),
            log: self.log.clone(),
        })
    }
}

impl ChildProcess for FakeChild {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_exited(&mut self) -> Result<bool, AppError> {
        if self.terminated {
            return Ok(true);
        }
        let mut log = self.log.borrow_mut();
        let polls = log.polls.entry(self.name.clone()).or_insert(0);
        *polls += 1;
        let exited = self.exit_after.is_some_and(|limit| *polls >= limit);
        if let (true, Some(flag)) = (exited, &self.interrupt_on_exit) {
            flag.store(true, Ordering::SeqCst);
        }
        Ok(exited)
    }

    fn terminate(&mut self) -> Result<(), AppError> {
        self.terminated = true;
        self.log.borrow_mut().terminated.push(self.name.clone());
        Ok(())
    }
}
