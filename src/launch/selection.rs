//! Interactive choice of the configuration to overwrite

use std::io::{BufRead, Write};

use super::discovery::ConfigFile;
use super::error::LaunchError;

/// Print the numbered menu of update targets
pub fn print_menu<W: Write>(out: &mut W, configs: &[ConfigFile]) -> std::io::Result<()> {
    writeln!(out, "Available launch configurations:")?;
    for (i, config) in configs.iter().enumerate() {
        writeln!(out, "  {}) {}", i + 1, config.name)?;
    }
    writeln!(out)
}

/// Prompt once and return the chosen configuration
///
/// There is no retry: anything but a valid menu number is
/// [`LaunchError::InvalidSelection`].
pub fn prompt<'a, R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    configs: &'a [ConfigFile],
) -> Result<&'a ConfigFile, LaunchError> {
    // A broken terminal is treated the same as bad input
    write!(out, "Enter the number of the config to UPDATE: ")
        .and_then(|_| out.flush())
        .map_err(|_| LaunchError::InvalidSelection)?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|_| LaunchError::InvalidSelection)?;

    let index = parse_selection(&line, configs.len())?;
    Ok(&configs[index])
}

/// Parse a 1-based menu number into a 0-based index
pub fn parse_selection(input: &str, count: usize) -> Result<usize, LaunchError> {
    let n: usize = input
        .trim()
        .parse()
        .map_err(|_| LaunchError::InvalidSelection)?;

    if n == 0 || n > count {
        return Err(LaunchError::InvalidSelection);
    }

    Ok(n - 1)
}
