//! Timestamped backups of a configuration before it is overwritten

use chrono::{DateTime, Local};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::LaunchError;
use crate::config::{BACKUP_MARKER, BACKUP_TIMESTAMP_FORMAT};

/// Backup path for `target`: `<target>.backup.<YYYYMMDD_HHMMSS>`
pub fn backup_path_for(target: &Path, now: DateTime<Local>) -> PathBuf {
    let mut path = OsString::from(target.as_os_str());
    path.push(BACKUP_MARKER);
    path.push(now.format(BACKUP_TIMESTAMP_FORMAT).to_string());
    PathBuf::from(path)
}

/// Copy `target` byte-for-byte next to itself and return the backup path
pub fn create_backup(target: &Path, now: DateTime<Local>) -> Result<PathBuf, LaunchError> {
    let backup_path = backup_path_for(target, now);

    // Backup mtime must be "now", not the target's, or pruning can take it
    fs::read(target)
        .and_then(|content| fs::write(&backup_path, content))
        .map_err(|source| LaunchError::Backup {
            path: target.to_path_buf(),
            source,
        })?;

    tracing::debug!(backup = %backup_path.display(), "created backup");
    Ok(backup_path)
}
