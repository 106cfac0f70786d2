//! Dev launcher: start the configured processes and watch them.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use crate::domain::{AppError, ProcessSpec};
use crate::ports::{ChildProcess, ProcessSpawner};

/// Why supervision stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The named process exited on its own.
    Exited(String),
    /// The interrupt flag was raised.
    Interrupted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupervisionOutcome {
    pub reason: StopReason,
    /// Processes that were still running and got terminated.
    pub terminated: Vec<String>,
}

/// Spawn every process in `specs`, then poll until one exits or `interrupt` is set.
///
/// All still-running children are terminated before returning, including when a
/// later spawn fails.
pub fn supervise<S: ProcessSpawner>(
    spawner: &S,
    specs: &[ProcessSpec],
    interrupt: &AtomicBool,
    poll_interval: Duration,
) -> Result<SupervisionOutcome, AppError> {
    let mut children = Vec::with_capacity(specs.len());
    for spec in specs {
        println!("📡 Starting {}...", spec.name);
        match spawner.spawn(spec) {
            Ok(child) => children.push(child),
            Err(err) => {
                stop_all(&mut children);
                return Err(err);
            }
        }
    }

    println!("\n✅ All processes are starting!");
    for spec in specs {
        if let Some(url) = &spec.url {
            println!("👉 {}: {}", spec.name, url);
        }
    }
    println!("\nPress Ctrl+C to stop.\n");

    let reason = loop {
        if interrupt.load(Ordering::SeqCst) {
            break StopReason::Interrupted;
        }
        match first_exited(&mut children) {
            // Ctrl+C also reaches the children, so an exit seen after it is part of the stop.
            Ok(Some(_)) if interrupt.load(Ordering::SeqCst) => break StopReason::Interrupted,
            Ok(Some(name)) => break StopReason::Exited(name),
            Ok(None) => {}
            Err(err) => {
                stop_all(&mut children);
                return Err(err);
            }
        }
        thread::sleep(poll_interval);
    };

    match &reason {
        StopReason::Exited(name) => println!("❌ {} process terminated.", name),
        StopReason::Interrupted => println!("\n🛑 Stopping processes..."),
    }

    let terminated = stop_all(&mut children);
    Ok(SupervisionOutcome { reason, terminated })
}

fn first_exited<C: ChildProcess>(children: &mut [C]) -> Result<Option<String>, AppError> {
    for child in children.iter_mut() {
        if child.has_exited()? {
            return Ok(Some(child.name().to_string()));
        }
    }
    Ok(None)
}

fn stop_all<C: ChildProcess>(children: &mut [C]) -> Vec<String> {
    let mut terminated = Vec::new();
    for child in children.iter_mut() {
        if matches!(child.has_exited(), Ok(true)) {
            continue;
        }
        match child.terminate() {
            Ok(()) => terminated.push(child.name().to_string()),
            Err(err) => tracing::warn!(name = child.name(), error = %err, "failed to stop"),
        }
    }
    terminated
}
