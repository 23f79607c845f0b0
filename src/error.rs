//! Error handling for compose-generator.
//! Defines the error taxonomy and the result type used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for generation runs.
///
/// Every variant is fatal for the current run. Nothing is retried automatically:
/// the user corrects the input or the environment and invokes the tool again.
#[derive(Error, Debug)]
pub enum Error {
    /// The catalog root is missing or a template definition is broken.
    #[error("Cannot load template catalog from '{location}': {reason}.")]
    CatalogLoadError { location: String, reason: String },

    /// An empty or invalid answer to a required question.
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// The user cancelled a prompt or declined to continue.
    #[error("Input aborted: {0}.")]
    InputAbortedError(String),

    /// Copying the template files into the destination failed.
    #[error("Could not copy template files to '{path}': {source}. Please try again.")]
    CopyError { path: String, source: io::Error },

    /// The generated secrets could not be written into the environment file.
    #[error("Could not write secrets to '{path}': {source}.")]
    SecretWriteError { path: String, source: io::Error },

    /// A built-in ignore pattern could not be compiled.
    #[error("Ignore pattern error: {0}.")]
    IgnorePatternError(String),

    /// Bringing the generated stack up failed.
    #[error("Could not run the stack: {0}.")]
    StackRunError(String),

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
