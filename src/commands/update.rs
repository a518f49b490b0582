//! Update command - Overwrite a named launch configuration with the latest draft
//!
//! Flow: discover → prompt → backup → rewrite → cleanup. Every failure before
//! cleanup ends the run; nothing is retried.

use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::utils;
use crate::config;
use crate::launch::cleanup::{self, CleanupReport};
use crate::launch::{backup, discovery, selection, update, LaunchError};

/// What a successful update did
#[derive(Debug)]
pub struct UpdateOutcome {
    /// Draft the content came from
    pub source: String,
    /// Configuration that was overwritten
    pub target: String,
    /// Copy of the target taken before the overwrite
    pub backup_path: PathBuf,
    pub temps_removed: CleanupReport,
    pub backups_pruned: CleanupReport,
}

/// Execute the update command against stdin
pub fn execute(dir: &Path) -> Result<UpdateOutcome> {
    let stdin = io::stdin();
    run(dir, &mut stdin.lock())
}

/// Run the update flow, reading the menu choice from `input`
pub fn run<R: BufRead>(dir: &Path, input: &mut R) -> Result<UpdateOutcome> {
    println!("{}", "🚀 Warp Launch Config Updater".bold());
    println!("==============================");
    println!();

    let configs = discovery::discover(dir)?;
    let temps = discovery::temp_configs(&configs);

    let source = discovery::latest(&temps)
        .ok_or(LaunchError::NoTempConfigs)?
        .clone();
    tracing::debug!(source = %source.path.display(), drafts = temps.len(), "selected draft");
    println!("{} Found temp config: {}", "✓".green(), source.name);
    println!();

    let targets = discovery::named_configs(&configs);
    if targets.is_empty() {
        return Err(LaunchError::NoNamedConfigs.into());
    }

    let mut stdout = io::stdout();
    selection::print_menu(&mut stdout, &targets)?;
    let target = selection::prompt(input, &mut stdout, &targets)?.clone();
    println!("Updating: {}", target.name);

    let backup_path = backup::create_backup(&target.path, Local::now())?;
    println!(
        "{} Backed up to: {}",
        "✓".green(),
        backup_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    );

    update::apply_draft(&source.path, &target.path, &target.name)?;
    println!("✅ Successfully updated '{}'!", target.name.green());

    println!();
    println!("🧹 Cleaning up temp files...");
    let temps_removed = cleanup::remove_temp_configs(&temps);
    if temps_removed.is_empty() {
        println!("  No temp files to clean up");
    } else {
        for name in &temps_removed.removed {
            println!("  {} Removed {}", "✓".green(), name);
        }
        println!(
            "  🎉 Cleaned up {} temp file(s)",
            temps_removed.removed.len()
        );
    }

    println!();
    println!("🧹 Cleaning up old backup files...");
    let backups_pruned = cleanup::prune_backups(
        dir,
        config::backup_retention(config::BACKUP_RETENTION_DAYS),
        SystemTime::now(),
        false,
    )
    .unwrap_or_else(|e| {
        tracing::warn!(error = %e, "backup cleanup skipped");
        CleanupReport::default()
    });
    utils::print_backup_report(&backups_pruned, false);

    Ok(UpdateOutcome {
        source: source.name,
        target: target.name,
        backup_path,
        temps_removed,
        backups_pruned,
    })
}
