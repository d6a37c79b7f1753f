// daybreak-core/src/launch/mod.rs
//! Fire-and-forget launching of a batch of shell commands.
use std::future::Future;

use daybreak_common::error::{DaybreakError, Result};
use tracing::debug;

pub mod spawn;

pub use spawn::{ShellSpawner, Spawner};

#[derive(Debug, Clone)]
pub enum LaunchOutcome {
    Started { pid: u32 },
    Failed { error: DaybreakError },
}

#[derive(Debug, Clone)]
pub struct LaunchRecord {
    pub command: String,
    pub outcome: LaunchOutcome,
}

impl LaunchRecord {
    pub fn started(&self) -> bool {
        matches!(self.outcome, LaunchOutcome::Started { .. })
    }
}

/// Progress notifications emitted while a batch runs.
#[derive(Debug)]
pub enum LaunchEvent<'a> {
    Starting { command: &'a str },
    Finished(&'a LaunchRecord),
}

#[derive(Debug, Clone, Default)]
pub struct LaunchSummary {
    pub records: Vec<LaunchRecord>,
}

impl LaunchSummary {
    pub fn succeeded(&self) -> usize {
        self.records.iter().filter(|r| r.started()).count()
    }

    pub fn total(&self) -> usize {
        self.records.len()
    }

    pub fn all_started(&self) -> bool {
        self.succeeded() == self.total()
    }
}

/// Spawns every command in order. A failed spawn is recorded and the batch moves on.
pub async fn launch_all<S, F>(commands: &[String], spawner: &S, mut on_event: F) -> LaunchSummary
where
    S: Spawner + ?Sized,
    F: FnMut(LaunchEvent<'_>),
{
    let mut records = Vec::with_capacity(commands.len());
    for command in commands {
        on_event(LaunchEvent::Starting { command });
        let outcome = match spawner.spawn(command) {
            Ok(pid) => {
                debug!("Started '{}' with pid {}", command, pid);
                LaunchOutcome::Started { pid }
            }
            Err(error) => {
                debug!("Launch failed, continuing with remaining commands: {}", error);
                LaunchOutcome::Failed { error }
            }
        };
        let record = LaunchRecord {
            command: command.clone(),
            outcome,
        };
        on_event(LaunchEvent::Finished(&record));
        records.push(record);
        // Give a pending cancellation a chance to run between spawns.
        tokio::task::yield_now().await;
    }
    LaunchSummary { records }
}

/// Like [`launch_all`], but stops with [`DaybreakError::Interrupted`] as soon as `cancel`
/// completes. Children already started keep running.
pub async fn launch_until<S, F, C>(
    commands: &[String],
    spawner: &S,
    on_event: F,
    cancel: C,
) -> Result<LaunchSummary>
where
    S: Spawner + ?Sized,
    F: FnMut(LaunchEvent<'_>),
    C: Future<Output = ()>,
{
    tokio::select! {
        biased;
        _ = cancel => {
            debug!("Launch batch cancelled");
            Err(DaybreakError::Interrupted)
        }
        summary = launch_all(commands, spawner, on_event) => Ok(summary),
    }
}
