//! Secret generation.
//! Credentials declared by a template are drawn from the operating system's
//! random source and written into the generated environment file.

use crate::config::Secret;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use rand::{distributions::Alphanumeric, rngs::OsRng, Rng};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Generates `length` characters from `[A-Za-z0-9]`.
pub fn generate_secret(length: usize) -> String {
    OsRng.sample_iter(&Alphanumeric).take(length).map(char::from).collect()
}

/// Sets `key=value` in env file content.
///
/// Every line assigning `key` is replaced in place, keeping its line ending.
/// Without such a line the assignment is appended using the file's line ending.
/// Other lines are left byte for byte as they are.
pub fn set_env_line(content: &str, key: &str, value: &str) -> String {
    let newline = if content.contains("\r\n") { "\r\n" } else { "\n" };
    let mut output = String::with_capacity(content.len() + key.len() + value.len() + 2);
    let mut found = false;

    for segment in content.split_inclusive('\n') {
        let line = segment.trim_end_matches(['\r', '\n']);
        let ending = &segment[line.len()..];
        match line.split_once('=') {
            Some((name, _)) if name.trim() == key => {
                found = true;
                output.push_str(key);
                output.push('=');
                output.push_str(value);
                output.push_str(ending);
            }
            _ => output.push_str(segment),
        }
    }

    if !found {
        if !output.is_empty() && !output.ends_with('\n') {
            output.push_str(newline);
        }
        output.push_str(key);
        output.push('=');
        output.push_str(value);
        output.push_str(newline);
    }
    output
}

/// Writes the generated secrets as `name: value` lines, in declaration order.
pub fn print_secrets<W: Write>(out: &mut W, secrets: &IndexMap<String, String>) -> io::Result<()> {
    if secrets.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "Following secrets were automatically generated:")?;
    for (name, value) in secrets {
        writeln!(out, "   {name}: {value}")?;
    }
    Ok(())
}

/// Generates a value for every secret and writes it into `env_file`.
///
/// # Arguments
/// * `env_file` - Environment file of the generated project, created if absent
/// * `secrets` - Secrets declared by the template
///
/// # Returns
/// * `Result<IndexMap<String, String>>` - Generated values keyed by secret name, in declaration order
///
/// # Errors
/// * `Error::SecretWriteError` if the environment file cannot be read or written
pub fn generate_secrets<P: AsRef<Path>>(
    env_file: P,
    secrets: &[Secret],
) -> Result<IndexMap<String, String>> {
    let env_file = env_file.as_ref();
    let mut generated = IndexMap::new();
    if secrets.is_empty() {
        return Ok(generated);
    }

    let write_error = |source: io::Error| Error::SecretWriteError {
        path: env_file.display().to_string(),
        source,
    };

    let mut content = match fs::read_to_string(env_file) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(write_error(e)),
    };

    for secret in secrets {
        let value = generate_secret(secret.length);
        debug!("Generated secret '{}' for '{}'", secret.name, secret.env_var);
        content = set_env_line(&content, &secret.env_var, &value);
        generated.insert(secret.name.clone(), value);
    }

    fs::write(env_file, content).map_err(write_error)?;
    Ok(generated)
}
