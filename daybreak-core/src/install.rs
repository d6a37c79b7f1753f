// daybreak-core/src/install.rs
//! Puts the launcher on `PATH` by symlinking it into `~/.local/bin`.
use std::env;
use std::path::{Path, PathBuf};

use daybreak_common::config::LAUNCHER_NAME;
use daybreak_common::error::{DaybreakError, Result};
use tracing::debug;

use crate::fs;

/// What happened to the destination link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    Created,
    AlreadyCorrect,
    /// A symlink to `previous` was removed and recreated pointing at the target.
    Replaced { previous: PathBuf },
}

#[derive(Debug, Clone)]
pub struct InstallReport {
    pub target: PathBuf,
    pub link: PathBuf,
    /// The link's parent directory did not exist and was created.
    pub created_dir: bool,
    pub outcome: LinkOutcome,
}

/// Locates the launcher executable next to the running installer.
pub fn resolve_target() -> Result<PathBuf> {
    let exe = env::current_exe().map_err(|e| {
        DaybreakError::io_context(e, "Failed to determine the installer's own location")
    })?;
    let dir = exe.parent().ok_or_else(|| {
        DaybreakError::Generic(format!("{} has no parent directory", exe.display()))
    })?;
    let target = dir.join(format!("{LAUNCHER_NAME}{}", env::consts::EXE_SUFFIX));
    debug!("Resolved install target: {}", target.display());
    Ok(target)
}

/// Makes `link` a symlink to `target`.
///
/// Missing parent directories of `link` are created. An existing symlink is kept if it already
/// points at `target` and replaced otherwise. Anything at `link` that is not a symlink is an
/// error and is left alone.
pub fn install_link(target: &Path, link: &Path) -> Result<InstallReport> {
    if !target.exists() {
        return Err(DaybreakError::NotFound(target.display().to_string()));
    }

    let created_dir = match link.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::ensure_dir_all(parent)?,
        _ => false,
    };

    let outcome = match fs::symlink_metadata(link)? {
        None => {
            fs::create_symlink(target, link)?;
            LinkOutcome::Created
        }
        Some(metadata) if metadata.file_type().is_symlink() => {
            let existing = fs::read_link(link)?;
            if existing == target {
                debug!("{} already points at {}", link.display(), target.display());
                LinkOutcome::AlreadyCorrect
            } else {
                debug!(
                    "{} points at {}, relinking to {}",
                    link.display(),
                    existing.display(),
                    target.display()
                );
                fs::remove_file(link)?;
                fs::create_symlink(target, link)?;
                LinkOutcome::Replaced { previous: existing }
            }
        }
        Some(_) => return Err(DaybreakError::Conflict(link.display().to_string())),
    };

    Ok(InstallReport {
        target: target.to_path_buf(),
        link: link.to_path_buf(),
        created_dir,
        outcome,
    })
}
