use std::sync::Arc;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DaybreakError {
    #[error("I/O Error: {0}")]
    Io(#[from] Arc<std::io::Error>),

    #[error("{0} not found")]
    NotFound(String),

    #[error("{0} exists but is not a symlink")]
    Conflict(String),

    #[error("Failed to launch '{command}': {reason}")]
    Spawn { command: String, reason: String },

    #[error("Operation cancelled by user")]
    Interrupted,

    #[error("Could not determine hostname: {0}")]
    Hostname(String),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Generic Error: {0}")]
    Generic(String),
}

impl From<std::io::Error> for DaybreakError {
    fn from(err: std::io::Error) -> Self {
        DaybreakError::Io(Arc::new(err))
    }
}

impl DaybreakError {
    /// Wraps an I/O error with a message naming what was being done, keeping the error kind.
    pub fn io_context(err: std::io::Error, context: impl std::fmt::Display) -> Self {
        DaybreakError::Io(Arc::new(std::io::Error::new(
            err.kind(),
            format!("{context}: {err}"),
        )))
    }
}

pub type Result<T> = std::result::Result<T, DaybreakError>;

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn io_context_keeps_kind_and_names_the_path() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let wrapped = DaybreakError::io_context(err, "Failed to create directory /x");
        match wrapped {
            DaybreakError::Io(inner) => {
                assert_eq!(inner.kind(), io::ErrorKind::PermissionDenied);
                assert_eq!(inner.to_string(), "Failed to create directory /x: denied");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn spawn_error_message_names_the_command() {
        let err = DaybreakError::Spawn {
            command: "open -g /Applications/Slack.app".to_string(),
            reason: "No such file or directory".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to launch 'open -g /Applications/Slack.app': No such file or directory"
        );
    }
}
