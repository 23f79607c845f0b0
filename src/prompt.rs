//! User input and interaction handling.
//! The engine only decides what is asked and in which order; rendering the
//! prompts is delegated to a [`Prompter`] implementation.

use crate::error::{Error, Result};
use crate::validator::Validator;
use dialoguer::{Confirm, Input, Select};

/// Trait for prompting the user.
pub trait Prompter {
    /// Asks a yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;

    /// Asks a free-text question, pre-filled with `default` when given.
    /// Answers rejected by `validator` are asked again.
    fn input(
        &self,
        prompt: &str,
        default: Option<&str>,
        validator: Option<Validator>,
    ) -> Result<String>;

    /// Presents a menu and returns the index of the chosen item.
    fn select(&self, prompt: &str, items: &[String]) -> Result<usize>;
}

/// [`Prompter`] backed by dialoguer terminal widgets.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

fn aborted(e: dialoguer::Error) -> Error {
    Error::InputAbortedError(e.to_string())
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::new().with_prompt(prompt).default(default).interact().map_err(aborted)
    }

    fn input(
        &self,
        prompt: &str,
        default: Option<&str>,
        validator: Option<Validator>,
    ) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        if let Some(validator) = validator {
            input = input.validate_with(move |value: &String| validator.validate(value));
        }
        input.interact_text().map_err(aborted)
    }

    fn select(&self, prompt: &str, items: &[String]) -> Result<usize> {
        Select::new().with_prompt(prompt).default(0).items(items).interact().map_err(aborted)
    }
}
