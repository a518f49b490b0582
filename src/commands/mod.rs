//! CLI commands

pub mod list;
pub mod prune;
pub mod update;
pub mod utils;
