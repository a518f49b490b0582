//! Shared utilities for commands

use chrono::{DateTime, Local};
use owo_colors::OwoColorize;
use std::time::SystemTime;

use crate::launch::cleanup::CleanupReport;

/// Format a modification time in local time
pub fn format_modified(time: SystemTime) -> String {
    let dt: DateTime<Local> = time.into();
    dt.format("%Y-%m-%d %H:%M").to_string()
}

/// Coarse age like `3d`, `5h`, `12m`
pub fn format_age(time: SystemTime, now: SystemTime) -> String {
    const MINUTE: u64 = 60;
    const HOUR: u64 = MINUTE * 60;
    const DAY: u64 = HOUR * 24;

    let secs = match now.duration_since(time) {
        Ok(d) => d.as_secs(),
        // Clock skew: modified in the future
        Err(_) => return "just now".to_string(),
    };

    if secs >= DAY {
        format!("{}d", secs / DAY)
    } else if secs >= HOUR {
        format!("{}h", secs / HOUR)
    } else if secs >= MINUTE {
        format!("{}m", secs / MINUTE)
    } else {
        "just now".to_string()
    }
}

/// Print the result of an expired-backup pass
pub fn print_backup_report(report: &CleanupReport, dry_run: bool) {
    if report.is_empty() {
        println!("  No old backup files to clean up");
        return;
    }

    let verb = if dry_run { "Would remove" } else { "Removed" };
    for name in &report.removed {
        println!("  {} {} old backup: {}", "✓".green(), verb, name);
    }

    if dry_run {
        println!(
            "  {}",
            format!("(DRY-RUN) {} old backup file(s) would be removed", report.removed.len())
                .blue()
        );
    } else {
        println!(
            "  🎉 Cleaned up {} old backup file(s)",
            report.removed.len().to_string().green()
        );
    }

    if report.failed > 0 {
        println!("  {} {} could not be removed", "Failed:".red(), report.failed);
    }
}
