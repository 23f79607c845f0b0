//! Placeholder substitution for materialized files.
//! Tokens have the form `${{NAME}}`. Substitution is flat text replacement:
//! values are inserted verbatim and never scanned again.

use crate::constants::{TOKEN_CLOSE, TOKEN_OPEN};
use crate::environment::EnvironmentMap;
use crate::error::{Error, Result};
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// Replaces every token whose name is a key of `env` with its value.
/// Tokens with unknown names are kept as they are.
pub fn substitute_str(content: &str, env: &EnvironmentMap) -> String {
    let mut output = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(start) = rest.find(TOKEN_OPEN) {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + TOKEN_OPEN.len()..];

        let replaced = after_open.find(TOKEN_CLOSE).and_then(|end| {
            env.get(&after_open[..end]).map(|value| (value, end))
        });

        match replaced {
            Some((value, end)) => {
                output.push_str(value);
                rest = &after_open[end + TOKEN_CLOSE.len()..];
            }
            None => {
                // Keep the delimiter and rescan, a known token may start inside.
                output.push_str(TOKEN_OPEN);
                rest = after_open;
            }
        }
    }
    output.push_str(rest);

    output
}

/// Rewrites the file at `path` in place.
///
/// A missing file is skipped: not every template ships every generated file.
///
/// # Errors
/// * `Error::IoError` if the file cannot be read or written
pub fn substitute_file<P: AsRef<Path>>(path: P, env: &EnvironmentMap) -> Result<()> {
    let path = path.as_ref();
    if !path.is_file() {
        warn!("Skipping substitution, '{}' does not exist", path.display());
        return Ok(());
    }

    debug!("Applying customizations to '{}'", path.display());
    let content = fs::read_to_string(path).map_err(Error::IoError)?;
    let substituted = substitute_str(&content, env);
    if substituted != content {
        fs::write(path, substituted).map_err(Error::IoError)?;
    }
    Ok(())
}
