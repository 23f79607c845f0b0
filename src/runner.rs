//! Hand-off to the container orchestration tool once a project is generated.

use crate::constants::COMPOSE_COMMAND;
use crate::error::{Error, Result};
use log::debug;
use std::path::Path;
use std::process::{Command, Stdio};

/// Trait for bringing a generated stack up.
pub trait StackRunner {
    /// Starts the stack defined in `project_dir`. When `detached` is set the
    /// stack keeps running in the background and is not managed afterwards.
    fn up(&self, project_dir: &Path, detached: bool) -> Result<()>;
}

/// Runs `docker-compose up` in the project directory.
#[derive(Debug, Default)]
pub struct DockerComposeRunner;

impl DockerComposeRunner {
    pub fn new() -> Self {
        Self
    }
}

/// Arguments passed to the compose executable.
pub fn compose_args(detached: bool) -> Vec<&'static str> {
    if detached {
        vec!["up", "-d"]
    } else {
        vec!["up"]
    }
}

impl StackRunner for DockerComposeRunner {
    fn up(&self, project_dir: &Path, detached: bool) -> Result<()> {
        let args = compose_args(detached);
        debug!("Running '{} {}' in {}", COMPOSE_COMMAND, args.join(" "), project_dir.display());

        let status = Command::new(COMPOSE_COMMAND)
            .args(&args)
            .current_dir(project_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| Error::StackRunError(format!("cannot start {COMPOSE_COMMAND}: {e}")))?;

        if !status.success() {
            return Err(Error::StackRunError(format!(
                "{COMPOSE_COMMAND} failed with status: {status}"
            )));
        }

        Ok(())
    }
}
