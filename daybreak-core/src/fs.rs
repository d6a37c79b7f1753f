/*
File: daybreak-core/src/fs.rs
Purpose: Primitive synchronous filesystem operations used by the installer.
*/
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use daybreak_common::error::{DaybreakError, Result};
use tracing::{debug, error};

/// Creates a directory and all missing parents. Returns `true` if the directory did not exist
/// before the call.
pub fn ensure_dir_all(path: &Path) -> Result<bool> {
    if path.is_dir() {
        debug!("Directory already exists: {}", path.display());
        return Ok(false);
    }
    debug!("Creating directory recursively: {}", path.display());
    fs::create_dir_all(path).map_err(|e| {
        error!("Failed create dir {}: {}", path.display(), e);
        DaybreakError::io_context(e, format!("Failed to create directory {}", path.display()))
    })?;
    Ok(true)
}

/// Returns metadata for a path *without* following symlinks, or `None` if nothing is there.
pub fn symlink_metadata(path: &Path) -> Result<Option<fs::Metadata>> {
    match fs::symlink_metadata(path) {
        Ok(metadata) => Ok(Some(metadata)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => {
            error!("Failed to stat {}: {}", path.display(), e);
            Err(DaybreakError::io_context(
                e,
                format!("Failed to inspect {}", path.display()),
            ))
        }
    }
}

pub fn read_link(path: &Path) -> Result<PathBuf> {
    fs::read_link(path).map_err(|e| {
        error!("Failed to read symlink {}: {}", path.display(), e);
        DaybreakError::io_context(e, format!("Failed to read symlink {}", path.display()))
    })
}

/// Removes a file or symlink.
pub fn remove_file(path: &Path) -> Result<()> {
    debug!("Removing file: {}", path.display());
    fs::remove_file(path).map_err(|e| {
        if e.kind() != io::ErrorKind::NotFound {
            error!("Failed remove file {}: {}", path.display(), e);
        }
        DaybreakError::io_context(e, format!("Failed to remove {}", path.display()))
    })
}

/// Creates a symbolic link. Unix only.
#[cfg(unix)]
pub fn create_symlink(target: &Path, link: &Path) -> Result<()> {
    debug!("Creating symlink {} -> {}", link.display(), target.display());
    std::os::unix::fs::symlink(target, link).map_err(|e| {
        error!(
            "Failed create symlink {} -> {}: {}",
            link.display(),
            target.display(),
            e
        );
        DaybreakError::io_context(e, format!("Failed to create symlink {}", link.display()))
    })
}

#[cfg(not(unix))]
pub fn create_symlink(target: &Path, link: &Path) -> Result<()> {
    tracing::warn!(
        "Symlink creation not supported on this platform: {} -> {}",
        link.display(),
        target.display()
    );
    Err(DaybreakError::Generic(
        "Symlinks not supported on this platform".to_string(),
    ))
}
