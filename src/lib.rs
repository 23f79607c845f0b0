//! compose-generator turns a catalog of parameterized stack templates into a
//! ready-to-run docker compose project by asking questions, substituting the
//! answers into the template files and generating secrets.

/// Template catalog loading from one or more catalog roots
pub mod catalog;

/// Command-line interface module
pub mod cli;

/// Template definition model parsed from `config.json` / `config.yml` descriptors
pub mod config;

/// Common constants: generated file names, token delimiters, intrinsic variables
pub mod constants;

/// Ordered map of answers used for substitution
pub mod environment;

/// Error types and handling
pub mod error;

/// Run orchestration combining all components
pub mod generator;

/// Copying template files into the destination
pub mod materializer;

/// User input and interaction handling
pub mod prompt;

/// Question visibility rules and answering
pub mod questions;

/// Bringing the generated stack up
pub mod runner;

/// Random credential generation
pub mod secrets;

/// `${{NAME}}` placeholder substitution
pub mod substitution;

/// Constraints on free-text answers
pub mod validator;
