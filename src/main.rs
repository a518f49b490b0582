//! warp-launch-helper: update Warp launch configurations from a saved draft
//!
//! Save the current session in Warp under a name starting with `temp`, then
//! run this tool to copy it over an existing launch configuration.

use anyhow::Result;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod launch;

#[derive(Parser)]
#[command(name = "warp-launch-helper")]
#[command(about = "Update Warp launch configurations from a temp draft", long_about = None)]
#[command(version)]
struct Cli {
    /// Launch configuration directory (default: ~/.warp/launch_configurations)
    #[arg(long, global = true, env = config::DIR_ENV)]
    dir: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Overwrite a named configuration with the newest temp draft (default)
    Update,

    /// List launch configurations
    List {
        /// Include backup files
        #[arg(short, long)]
        backups: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove backup files older than the retention window
    Prune {
        /// Retention window in days
        #[arg(long, default_value_t = config::BACKUP_RETENTION_DAYS)]
        days: u64,

        /// Show what would be deleted without making changes
        #[arg(short = 'n', long)]
        dry_run: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "❌".red(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let dir = config::launch_dir(cli.dir)?;
    tracing::debug!(dir = %dir.display(), "using launch configuration directory");

    match cli.command.unwrap_or(Commands::Update) {
        Commands::Update => {
            let outcome = commands::update::execute(&dir)?;
            tracing::debug!(
                source = %outcome.source,
                target = %outcome.target,
                backup = %outcome.backup_path.display(),
                temps_removed = outcome.temps_removed.removed.len(),
                backups_pruned = outcome.backups_pruned.removed.len(),
                "update complete"
            );
        }

        Commands::List { backups, json } => {
            let options = commands::list::ListOptions { backups, json };
            let output = commands::list::execute(&dir, options)?;
            println!("{}", output);
        }

        Commands::Prune { days, dry_run } => {
            if dry_run {
                println!("{}", "(DRY-RUN MODE - no changes will be made)".blue());
            }
            commands::prune::execute(&dir, days, dry_run)?;
        }
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` overrides the `--verbose` default
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
