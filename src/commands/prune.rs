//! Prune command - Remove expired backup files

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::Path;
use std::time::SystemTime;

use super::utils;
use crate::config;
use crate::launch::cleanup::{self, CleanupReport};

/// Execute the prune command
pub fn execute(dir: &Path, days: u64, dry_run: bool) -> Result<CleanupReport> {
    if !dir.exists() {
        println!("No launch configuration directory found.");
        return Ok(CleanupReport::default());
    }

    println!(
        "🧹 Cleaning up backup files older than {} day(s) in {}",
        days,
        dir.display().dimmed()
    );

    let report = cleanup::prune_backups(
        dir,
        config::backup_retention(days),
        SystemTime::now(),
        dry_run,
    )
    .with_context(|| format!("Failed to prune backups in: {}", dir.display()))?;

    utils::print_backup_report(&report, dry_run);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launch::testutil::{days, write_aged};

    #[test]
    fn test_prune_custom_retention() {
        let dir = tempfile::tempdir().unwrap();
        write_aged(dir.path(), "a.yaml.backup.x", "", days(3));
        write_aged(dir.path(), "b.yaml.backup.y", "", days(1));

        let report = execute(dir.path(), 2, false).unwrap();

        assert_eq!(report.removed, ["a.yaml.backup.x"]);
        assert!(dir.path().join("b.yaml.backup.y").exists());
    }

    #[test]
    fn test_prune_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let report = execute(&dir.path().join("missing"), 7, false).unwrap();
        assert!(report.is_empty());
    }
}
