// daybreak-common/src/config.rs
use std::env;
use std::path::PathBuf;

use directories::UserDirs;
use tracing::debug;

use super::error::{DaybreakError, Result};

/// Name of the launcher executable, and of the symlink the installer places on `PATH`.
pub const LAUNCHER_NAME: &str = "start-the-day";
const DEFAULT_SHELL: &str = "/bin/sh";

#[derive(Debug, Clone)]
pub struct Config {
    pub home_dir: PathBuf,
    /// Shell used to interpret launch commands (`<shell> -c <command>`).
    pub shell: PathBuf,
    /// When set, used instead of the system hostname to select the command list.
    pub hostname_override: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        debug!("Loading daybreak configuration");

        let home_dir = match non_empty_var("DAYBREAK_HOME") {
            Some(home) => {
                debug!("Using DAYBREAK_HOME override: {}", home);
                PathBuf::from(home)
            }
            None => UserDirs::new()
                .map(|ud| ud.home_dir().to_path_buf())
                .ok_or_else(|| {
                    DaybreakError::Config("failed to determine the home directory".to_string())
                })?,
        };

        let shell = non_empty_var("DAYBREAK_SHELL")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SHELL));
        let hostname_override = non_empty_var("DAYBREAK_HOSTNAME");

        debug!(
            "Configuration loaded: home={}, shell={}, hostname_override={:?}",
            home_dir.display(),
            shell.display(),
            hostname_override
        );
        Ok(Self {
            home_dir,
            shell,
            hostname_override,
        })
    }

    pub fn local_bin_dir(&self) -> PathBuf {
        self.home_dir.join(".local").join("bin")
    }

    pub fn link_path(&self) -> PathBuf {
        self.local_bin_dir().join(LAUNCHER_NAME)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}
