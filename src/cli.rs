//! Command-line interface implementation for compose-generator.
//! Provides argument parsing using clap.

use crate::catalog::default_templates_dir;
use crate::generator::GenerateOptions;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for compose-generator.
#[derive(Parser, Debug)]
#[command(
    name = "compose-generator",
    author,
    version,
    about = "Generate and manage docker compose configuration files for your projects",
    long_about = None
)]
pub struct Args {
    /// Generate compose file in advanced mode
    #[arg(short, long)]
    pub advanced: bool,

    /// Run docker-compose after creating the compose file
    #[arg(short, long)]
    pub run: bool,

    /// Run docker-compose detached after creating the compose file
    #[arg(short, long, alias = "demonized")]
    pub detached: bool,

    /// Replace a previously generated project without asking
    #[arg(short, long)]
    pub force: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Directory where the project is generated
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Directory holding the predefined templates
    #[arg(long, value_name = "DIR", env = "COMPOSE_GENERATOR_TEMPLATES")]
    pub templates_dir: Option<PathBuf>,

    /// Directory holding user-provided templates, listed after the predefined ones
    #[arg(long, value_name = "DIR", env = "COMPOSE_GENERATOR_CUSTOM_TEMPLATES")]
    pub custom_templates_dir: Option<PathBuf>,
}

impl Args {
    pub fn options(&self) -> GenerateOptions {
        GenerateOptions {
            advanced: self.advanced,
            run: self.run,
            detached: self.detached,
            force: self.force,
        }
    }

    /// Catalog roots in menu order: predefined templates first, then custom ones.
    pub fn catalog_roots(&self) -> Vec<PathBuf> {
        let mut roots = vec![self.templates_dir.clone().unwrap_or_else(default_templates_dir)];
        roots.extend(self.custom_templates_dir.clone());
        roots
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}
