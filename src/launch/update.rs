//! Merge a draft's content into a named configuration

use std::fs;
use std::path::Path;

use super::error::LaunchError;
use crate::config::NAME_KEY;

/// Replace the first `name:` line of `content` with `name: <name>`
///
/// Lines are split on `\n` only; every other byte passes through untouched.
pub fn rewrite_name(content: &str, name: &str) -> String {
    let mut replaced = false;

    content
        .split('\n')
        .map(|line| {
            if !replaced && line.starts_with(NAME_KEY) {
                replaced = true;
                format!("{} {}", NAME_KEY, name)
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Overwrite `target` with the draft at `temp`, keeping the target's name
pub fn apply_draft(temp: &Path, target: &Path, target_name: &str) -> Result<(), LaunchError> {
    let content = fs::read_to_string(temp).map_err(|source| LaunchError::Update {
        path: temp.to_path_buf(),
        source,
    })?;

    fs::write(target, rewrite_name(&content, target_name)).map_err(|source| {
        LaunchError::Update {
            path: target.to_path_buf(),
            source,
        }
    })
}
