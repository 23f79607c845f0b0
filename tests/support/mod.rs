#![allow(dead_code)]

use compose_generator::error::{Error, Result};
use compose_generator::prompt::Prompter;
use compose_generator::runner::StackRunner;
use compose_generator::validator::Validator;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Confirm(bool),
    Text(String),
    /// Accept the pre-filled default of a text prompt
    Default,
    Select(usize),
    Abort,
}

/// Prompter that replays scripted answers and records every prompt it was shown.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self { answers: RefCell::new(answers.into()), asked: RefCell::new(Vec::new()) }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next(&self, prompt: &str) -> Result<Answer> {
        self.asked.borrow_mut().push(prompt.to_string());
        match self.answers.borrow_mut().pop_front() {
            Some(Answer::Abort) => Err(Error::InputAbortedError("interrupted".to_string())),
            Some(answer) => Ok(answer),
            None => panic!("no scripted answer left for prompt '{prompt}'"),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        match self.next(prompt)? {
            Answer::Confirm(value) => Ok(value),
            Answer::Default => Ok(default),
            other => panic!("expected a confirm answer for '{prompt}', got {other:?}"),
        }
    }

    fn input(
        &self,
        prompt: &str,
        default: Option<&str>,
        validator: Option<Validator>,
    ) -> Result<String> {
        let value = match self.next(prompt)? {
            Answer::Text(value) => value,
            Answer::Default => default.unwrap_or_default().to_string(),
            other => panic!("expected a text answer for '{prompt}', got {other:?}"),
        };
        if let Some(validator) = validator {
            if let Err(message) = validator.validate(&value) {
                panic!("scripted answer '{value}' for '{prompt}' is invalid: {message}");
            }
        }
        Ok(value)
    }

    fn select(&self, prompt: &str, items: &[String]) -> Result<usize> {
        match self.next(prompt)? {
            Answer::Select(index) => {
                assert!(index < items.len(), "selection {index} out of {items:?}");
                Ok(index)
            }
            other => panic!("expected a selection for '{prompt}', got {other:?}"),
        }
    }
}

/// Runner that records hand-offs instead of starting containers.
#[derive(Default)]
pub struct RecordingRunner {
    pub calls: RefCell<Vec<(PathBuf, bool)>>,
}

impl StackRunner for RecordingRunner {
    fn up(&self, project_dir: &Path, detached: bool) -> Result<()> {
        self.calls.borrow_mut().push((project_dir.to_path_buf(), detached));
        Ok(())
    }
}

/// Writes `files` (relative path, content) under `dir`, creating parents.
pub fn write_tree(dir: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let path = dir.join(path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

/// Path to the catalog shipped with the repository.
pub fn bundled_templates() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates")
}
