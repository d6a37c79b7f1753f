// daybreak-core/src/launch/spawn.rs
use std::path::PathBuf;
use std::process::{Command, Stdio};

use daybreak_common::error::{DaybreakError, Result};
use tracing::debug;

/// Starts a command without waiting for it. Returns the child's process id.
pub trait Spawner {
    fn spawn(&self, command: &str) -> Result<u32>;
}

/// Runs each command as `<shell> -c <command>` in its own process group, with stdio on the null
/// device, so the child keeps running after the launcher exits.
#[derive(Debug, Clone)]
pub struct ShellSpawner {
    shell: PathBuf,
}

impl ShellSpawner {
    pub fn new(shell: impl Into<PathBuf>) -> Self {
        Self {
            shell: shell.into(),
        }
    }
}

impl Spawner for ShellSpawner {
    fn spawn(&self, command: &str) -> Result<u32> {
        debug!("Spawning via {}: {}", self.shell.display(), command);
        let mut cmd = Command::new(&self.shell);
        cmd.arg("-c").arg(command);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::null());
        cmd.stderr(Stdio::null());
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            cmd.process_group(0);
        }

        // The Child handle is dropped without waiting; the process is not killed on drop.
        let child = cmd.spawn().map_err(|e| {
            debug!("Failed to spawn '{}': {}", command, e);
            DaybreakError::Spawn {
                command: command.to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(child.id())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn shell_spawner_returns_a_pid() {
        let spawner = ShellSpawner::new("/bin/sh");
        let pid = spawner.spawn("exit 0").unwrap();
        assert!(pid > 0);
    }

    #[test]
    fn shell_metacharacters_are_passed_through_to_the_shell() {
        let spawner = ShellSpawner::new("/bin/sh");
        assert!(spawner.spawn("true && echo 'quoted arg' > /dev/null").is_ok());
    }

    #[test]
    fn missing_shell_is_a_spawn_error() {
        let spawner = ShellSpawner::new("/nonexistent/definitely-not-a-shell");
        let err = spawner.spawn("true").unwrap_err();
        match err {
            DaybreakError::Spawn { command, .. } => assert_eq!(command, "true"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
