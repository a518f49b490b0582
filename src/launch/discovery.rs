//! Discovery of launch configuration and backup files
//!
//! Records are rebuilt from the directory listing on every call; nothing is
//! cached between runs.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::config::{BACKUP_MARKER, CONFIG_EXTENSION, TEMP_PREFIX};

/// A launch configuration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    /// File name without the `.yaml` extension
    pub name: String,
    /// Full path to the file
    pub path: PathBuf,
    /// Last modification time
    pub modified: SystemTime,
    /// Whether this is a draft saved under the temp prefix
    pub is_temp: bool,
}

/// A timestamped backup left by a previous update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupFile {
    pub file_name: String,
    pub path: PathBuf,
    pub modified: SystemTime,
}

/// List launch configurations in `dir`, sorted by file name
///
/// A missing directory is treated as empty.
pub fn discover(dir: &Path) -> Result<Vec<ConfigFile>> {
    let mut configs = Vec::new();

    let Some(entries) = read_dir_if_exists(dir)? else {
        return Ok(configs);
    };

    for entry in entries.flatten() {
        let file_name = entry.file_name().to_string_lossy().to_string();
        let Some(name) = config_name(&file_name) else {
            continue;
        };

        // Follows symlinks
        let metadata = match fs::metadata(entry.path()) {
            Ok(m) if m.is_file() => m,
            _ => continue,
        };

        configs.push(ConfigFile {
            name: name.to_string(),
            path: entry.path(),
            modified: metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH),
            is_temp: name.starts_with(TEMP_PREFIX),
        });
    }

    configs.sort_by(|a, b| a.name.cmp(&b.name));
    tracing::debug!(dir = %dir.display(), count = configs.len(), "discovered configs");

    Ok(configs)
}

/// List backup files in `dir`, oldest first
pub fn discover_backups(dir: &Path) -> Result<Vec<BackupFile>> {
    let mut backups = Vec::new();

    let Some(entries) = read_dir_if_exists(dir)? else {
        return Ok(backups);
    };

    for entry in entries.flatten() {
        let file_name = entry.file_name().to_string_lossy().to_string();
        if !file_name.contains(BACKUP_MARKER) {
            continue;
        }

        let metadata = match fs::metadata(entry.path()) {
            Ok(m) if m.is_file() => m,
            _ => continue,
        };

        backups.push(BackupFile {
            file_name,
            path: entry.path(),
            modified: metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH),
        });
    }

    backups.sort_by(|a, b| {
        a.modified
            .cmp(&b.modified)
            .then_with(|| a.file_name.cmp(&b.file_name))
    });

    Ok(backups)
}

/// Draft configurations
pub fn temp_configs(configs: &[ConfigFile]) -> Vec<ConfigFile> {
    configs.iter().filter(|c| c.is_temp).cloned().collect()
}

/// Update targets
pub fn named_configs(configs: &[ConfigFile]) -> Vec<ConfigFile> {
    configs.iter().filter(|c| !c.is_temp).cloned().collect()
}

/// The most recently modified configuration
pub fn latest(configs: &[ConfigFile]) -> Option<&ConfigFile> {
    configs.iter().max_by_key(|c| c.modified)
}

/// Strip the extension from a config file name, skipping hidden files
fn config_name(file_name: &str) -> Option<&str> {
    if file_name.starts_with('.') {
        return None;
    }
    file_name
        .strip_suffix(CONFIG_EXTENSION)
        .filter(|name| !name.is_empty())
}

fn read_dir_if_exists(dir: &Path) -> Result<Option<fs::ReadDir>> {
    match fs::read_dir(dir) {
        Ok(entries) => Ok(Some(entries)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Failed to read: {}", dir.display())),
    }
}
