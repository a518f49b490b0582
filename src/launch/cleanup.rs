//! Best-effort removal of drafts and expired backups

use anyhow::Result;
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

use super::discovery::{self, BackupFile, ConfigFile};

/// Outcome of a cleanup pass
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanupReport {
    /// Names of removed files (or candidates, in a dry run)
    pub removed: Vec<String>,
    /// Files that could not be deleted
    pub failed: usize,
}

impl CleanupReport {
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty()
    }
}

/// Delete every draft configuration; failures are counted, not raised
pub fn remove_temp_configs(temps: &[ConfigFile]) -> CleanupReport {
    let mut report = CleanupReport::default();

    for temp in temps {
        match fs::remove_file(&temp.path) {
            Ok(()) => report.removed.push(temp.name.clone()),
            Err(e) => {
                tracing::debug!(path = %temp.path.display(), error = %e, "could not remove temp config");
                report.failed += 1;
            }
        }
    }

    report
}

/// Backups whose mtime is strictly older than `now - retention`
pub fn expired_backups(
    backups: Vec<BackupFile>,
    retention: Duration,
    now: SystemTime,
) -> Vec<BackupFile> {
    let Some(cutoff) = now.checked_sub(retention) else {
        return Vec::new();
    };

    backups
        .into_iter()
        .filter(|b| b.modified < cutoff)
        .collect()
}

/// Delete backups in `dir` older than `retention`
///
/// With `dry_run`, the report lists what would be removed and nothing is
/// touched.
pub fn prune_backups(
    dir: &Path,
    retention: Duration,
    now: SystemTime,
    dry_run: bool,
) -> Result<CleanupReport> {
    let expired = expired_backups(discovery::discover_backups(dir)?, retention, now);
    let mut report = CleanupReport::default();

    for backup in expired {
        if dry_run {
            report.removed.push(backup.file_name);
            continue;
        }

        match fs::remove_file(&backup.path) {
            Ok(()) => report.removed.push(backup.file_name),
            Err(e) => {
                tracing::debug!(path = %backup.path.display(), error = %e, "could not remove backup");
                report.failed += 1;
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{backup_retention, BACKUP_RETENTION_DAYS};
    use crate::launch::discovery::{discover, temp_configs};
    use crate::launch::testutil::{days, secs, write_aged};

    #[test]
    fn test_remove_temp_configs() {
        let dir = tempfile::tempdir().unwrap();
        write_aged(dir.path(), "temp1.yaml", "", secs(0));
        write_aged(dir.path(), "temp2.yaml", "", secs(0));
        write_aged(dir.path(), "work.yaml", "", secs(0));

        let temps = temp_configs(&discover(dir.path()).unwrap());
        let report = remove_temp_configs(&temps);

        assert_eq!(report.removed, ["temp1", "temp2"]);
        assert_eq!(report.failed, 0);
        assert!(dir.path().join("work.yaml").exists());
        assert!(!dir.path().join("temp1.yaml").exists());
    }

    #[test]
    fn test_remove_temp_configs_counts_failures() {
        let dir = tempfile::tempdir().unwrap();
        write_aged(dir.path(), "temp1.yaml", "", secs(0));
        let temps = temp_configs(&discover(dir.path()).unwrap());

        // Already gone by the time cleanup runs
        fs::remove_file(dir.path().join("temp1.yaml")).unwrap();

        let report = remove_temp_configs(&temps);
        assert!(report.is_empty());
        assert_eq!(report.failed, 1);
    }

    #[test]
    fn test_prune_backups_respects_retention() {
        let dir = tempfile::tempdir().unwrap();
        write_aged(dir.path(), "a.yaml.backup.old", "", days(8));
        write_aged(dir.path(), "b.yaml.backup.recent", "", days(6));
        write_aged(dir.path(), "c.yaml", "", days(30));

        let report = prune_backups(
            dir.path(),
            backup_retention(BACKUP_RETENTION_DAYS),
            SystemTime::now(),
            false,
        )
        .unwrap();

        assert_eq!(report.removed, ["a.yaml.backup.old"]);
        assert!(!dir.path().join("a.yaml.backup.old").exists());
        assert!(dir.path().join("b.yaml.backup.recent").exists());
        // Non-backups are never considered, however old
        assert!(dir.path().join("c.yaml").exists());
    }

    #[test]
    fn test_prune_backups_dry_run() {
        let dir = tempfile::tempdir().unwrap();
        write_aged(dir.path(), "a.yaml.backup.old", "", days(10));

        let report = prune_backups(dir.path(), days(7), SystemTime::now(), true).unwrap();

        assert_eq!(report.removed, ["a.yaml.backup.old"]);
        assert!(dir.path().join("a.yaml.backup.old").exists());
    }

    #[test]
    fn test_prune_backups_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let report =
            prune_backups(&dir.path().join("nope"), days(7), SystemTime::now(), false).unwrap();
        assert_eq!(report, CleanupReport::default());
    }

    #[test]
    fn test_expired_backups_cutoff_is_strict() {
        let now = SystemTime::now();
        let at_cutoff = BackupFile {
            file_name: "x.backup.1".to_string(),
            path: "/cfg/x.backup.1".into(),
            modified: now - days(7),
        };
        assert!(expired_backups(vec![at_cutoff], days(7), now).is_empty());
    }
}
