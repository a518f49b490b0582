//! Terminal failures of the update flow

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error(
        "No temp files found! Please save your current session as a temp config first.\n   \
         Use Cmd+P → 'Save New Launch Configuration' → name it 'temp-something'"
    )]
    NoTempConfigs,

    #[error("No existing launch configurations found!")]
    NoNamedConfigs,

    #[error("Invalid selection!")]
    InvalidSelection,

    #[error("Failed to backup {}", .path.display())]
    Backup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to update config {}", .path.display())]
    Update {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
