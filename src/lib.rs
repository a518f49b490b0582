//! warp-launch-helper library
//!
//! Discovery, backup, draft merging and cleanup of Warp launch
//! configurations stored as YAML files.

pub mod config;
pub mod launch;
