//! List command - Show launch configurations and their backups

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use serde::Serialize;
use std::path::Path;
use std::time::SystemTime;

use super::utils;
use crate::launch::discovery;

/// Kind of file in the launch configuration directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Named,
    Temp,
    Backup,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named => write!(f, "named"),
            Self::Temp => write!(f, "temp"),
            Self::Backup => write!(f, "backup"),
        }
    }
}

/// One row of the listing
#[derive(Debug, Serialize)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
    pub path: String,
    /// Local time, `YYYY-MM-DD HH:MM`
    pub modified: String,
    #[serde(skip)]
    pub modified_at: SystemTime,
}

/// Options for the list command
pub struct ListOptions {
    /// Include backup files
    pub backups: bool,
    /// Emit JSON instead of a table
    pub json: bool,
}

/// Collect configurations (and optionally backups) in `dir`
pub fn entries(dir: &Path, with_backups: bool) -> Result<Vec<Entry>> {
    let mut entries: Vec<Entry> = discovery::discover(dir)?
        .into_iter()
        .map(|c| Entry {
            kind: if c.is_temp {
                EntryKind::Temp
            } else {
                EntryKind::Named
            },
            path: c.path.to_string_lossy().to_string(),
            modified: utils::format_modified(c.modified),
            modified_at: c.modified,
            name: c.name,
        })
        .collect();

    if with_backups {
        entries.extend(discovery::discover_backups(dir)?.into_iter().map(|b| Entry {
            kind: EntryKind::Backup,
            path: b.path.to_string_lossy().to_string(),
            modified: utils::format_modified(b.modified),
            modified_at: b.modified,
            name: b.file_name,
        }));
    }

    Ok(entries)
}

/// Execute the list command and return formatted output
pub fn execute(dir: &Path, options: ListOptions) -> Result<String> {
    let entries = entries(dir, options.backups)?;

    if options.json {
        return Ok(serde_json::to_string_pretty(&entries)?);
    }

    let now = SystemTime::now();
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Name"),
        Cell::new("Kind"),
        Cell::new("Modified"),
        Cell::new("Age"),
    ]);

    for entry in &entries {
        table.add_row(vec![
            Cell::new(&entry.name),
            Cell::new(entry.kind),
            Cell::new(&entry.modified),
            Cell::new(utils::format_age(entry.modified_at, now)),
        ]);
    }

    let mut output = table.to_string();
    output.push_str(&format!(
        "\n\n{} configuration(s) in {}",
        entries
            .iter()
            .filter(|e| e.kind != EntryKind::Backup)
            .count(),
        dir.display()
    ));

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launch::testutil::{days, secs, write_aged};

    fn seeded() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        write_aged(dir.path(), "work.yaml", "name: work\n", secs(0));
        write_aged(dir.path(), "temp-a.yaml", "name: temp-a\n", secs(0));
        write_aged(dir.path(), "work.yaml.backup.20240101_000000", "", days(2));
        dir
    }

    #[test]
    fn test_entries_without_backups() {
        let dir = seeded();
        let entries = entries(dir.path(), false).unwrap();

        let kinds: Vec<_> = entries.iter().map(|e| (e.name.as_str(), e.kind)).collect();
        assert_eq!(
            kinds,
            [("temp-a", EntryKind::Temp), ("work", EntryKind::Named)]
        );
    }

    #[test]
    fn test_entries_with_backups() {
        let dir = seeded();
        let entries = entries(dir.path(), true).unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[2].kind, EntryKind::Backup);
        assert_eq!(entries[2].name, "work.yaml.backup.20240101_000000");
    }

    #[test]
    fn test_table_output() {
        let dir = seeded();
        let output = execute(
            dir.path(),
            ListOptions {
                backups: true,
                json: false,
            },
        )
        .unwrap();

        assert!(output.contains("work"));
        assert!(output.contains("backup"));
        assert!(output.contains("2 configuration(s)"));
    }

    #[test]
    fn test_json_output() {
        let dir = seeded();
        let output = execute(
            dir.path(),
            ListOptions {
                backups: false,
                json: true,
            },
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let arr = value.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[0]["kind"], "temp");
        assert_eq!(arr[1]["name"], "work");
        assert!(arr[1].get("modified_at").is_none());
    }

    #[test]
    fn test_entry_kind_display() {
        assert_eq!(EntryKind::Named.to_string(), "named");
        assert_eq!(EntryKind::Temp.to_string(), "temp");
        assert_eq!(EntryKind::Backup.to_string(), "backup");
    }
}
