//! Launch configuration paths and naming conventions

use anyhow::{Context, Result};
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable that overrides the launch configuration directory
pub const DIR_ENV: &str = "WARP_LAUNCH_CONFIG_DIR";

/// Extension shared by every launch configuration file
pub const CONFIG_EXTENSION: &str = ".yaml";

/// File name prefix marking a draft (temp) configuration
pub const TEMP_PREFIX: &str = "temp";

/// Substring identifying backup files
pub const BACKUP_MARKER: &str = ".backup.";

/// chrono format for the backup suffix
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Line prefix holding the configuration's display name
pub const NAME_KEY: &str = "name:";

/// Backups older than this are removed after an update
pub const BACKUP_RETENTION_DAYS: u64 = 7;

/// Retention window for `days`, clamped instead of overflowing
pub fn backup_retention(days: u64) -> Duration {
    Duration::from_secs(days.saturating_mul(24 * 60 * 60))
}

/// Resolve the launch configuration directory
///
/// Precedence: explicit `--dir`, then `WARP_LAUNCH_CONFIG_DIR`, then
/// `<home>/.warp/launch_configurations`.
pub fn launch_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }

    if let Some(dir) = env::var_os(DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    let home = home_dir().context("Could not determine home directory")?;
    Ok(home.join(".warp").join("launch_configurations"))
}

/// Get the user's home directory
///
/// Falls back to `HOME`, then `USERPROFILE` (Windows) when the platform
/// lookup has nothing.
fn home_dir() -> Option<PathBuf> {
    dirs::home_dir().or_else(|| home_from_env(|key| env::var_os(key)))
}

fn home_from_env<F>(lookup: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<OsString>,
{
    ["HOME", "USERPROFILE"]
        .into_iter()
        .filter_map(lookup)
        .find(|v| !v.is_empty())
        .map(PathBuf::from)
}
