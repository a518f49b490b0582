//! Core launch configuration operations

pub mod backup;
pub mod cleanup;
pub mod discovery;
pub mod error;
pub mod selection;
pub mod update;

// Re-exports for library consumers
#[allow(unused_imports)]
pub use discovery::{discover, discover_backups, BackupFile, ConfigFile};
#[allow(unused_imports)]
pub use error::LaunchError;
