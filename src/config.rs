//! Template definition model.
//! A definition is read from the descriptor file (`config.json`, `config.yml` or
//! `config.yaml`) that sits next to the template's files in the catalog.

use crate::validator::{deserialize_validator, Validator};
use log::debug;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;

/// One stack definition from the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateDefinition {
    /// Name shown in the selection menu
    pub label: String,
    /// Location of the template's file tree inside the catalog root
    #[serde(default, alias = "dir")]
    pub directory: String,
    #[serde(default)]
    pub files: Vec<FileEntry>,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub volumes: Vec<Volume>,
    #[serde(default)]
    pub secrets: Vec<Secret>,
    /// Resolved file tree, filled in by the catalog loader
    #[serde(skip)]
    pub source_dir: PathBuf,
}

/// A file of the template that carries special meaning.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileEntry {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: FileKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    #[serde(alias = "docker")]
    Dockerfile,
    Compose,
    Env,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    #[serde(alias = "yes_no")]
    Boolean,
    Text,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Question {
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[serde(default)]
    pub default_value: String,
    #[serde(default, deserialize_with = "deserialize_validator")]
    pub validator: Option<Validator>,
    pub env_var: String,
    #[serde(default)]
    pub advanced: bool,
    #[serde(default)]
    pub with_dockerfile: bool,
}

/// A bind or volume path asked the same way as a text question.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Volume {
    pub text: String,
    #[serde(default)]
    pub default_value: String,
    pub env_var: String,
    #[serde(default)]
    pub advanced: bool,
    #[serde(default)]
    pub with_dockerfile: bool,
}

impl Volume {
    /// Volumes are always free-text paths without a validator.
    pub fn as_question(&self) -> Question {
        Question {
            text: self.text.clone(),
            question_type: QuestionType::Text,
            default_value: self.default_value.clone(),
            validator: None,
            env_var: self.env_var.clone(),
            advanced: self.advanced,
            with_dockerfile: self.with_dockerfile,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Secret {
    /// Label printed next to the generated value
    pub name: String,
    #[serde(alias = "var")]
    pub env_var: String,
    pub length: usize,
}

impl TemplateDefinition {
    pub fn has_dockerfile(&self) -> bool {
        self.files.iter().any(|file| file.kind == FileKind::Dockerfile)
    }

    /// Questions followed by volumes, in the order they are asked.
    pub fn all_questions(&self) -> Vec<Question> {
        self.questions
            .iter()
            .cloned()
            .chain(self.volumes.iter().map(Volume::as_question))
            .collect()
    }

    /// Checks the authoring invariants of the definition.
    ///
    /// # Returns
    /// * `Err(String)` - Description of the first violated invariant
    pub fn validate(&self) -> Result<(), String> {
        if self.label.trim().is_empty() {
            return Err("label must not be empty".to_string());
        }
        if self.directory.trim().is_empty() {
            return Err("directory must not be empty".to_string());
        }

        let mut env_vars = HashSet::new();
        for question in self.all_questions() {
            if question.env_var.trim().is_empty() {
                return Err(format!("question '{}' has no env_var", question.text));
            }
            if !env_vars.insert(question.env_var.clone()) {
                return Err(format!("env_var '{}' is declared more than once", question.env_var));
            }
            match question.question_type {
                QuestionType::Boolean => {
                    if question.default_value.parse::<bool>().is_err() {
                        return Err(format!(
                            "default value '{}' of '{}' must be 'true' or 'false'",
                            question.default_value, question.env_var
                        ));
                    }
                }
                QuestionType::Text => {
                    if let Some(validator) = question.validator {
                        validator.validate(&question.default_value).map_err(|e| {
                            format!(
                                "default value '{}' of '{}' is invalid: {}",
                                question.default_value, question.env_var, e
                            )
                        })?;
                    }
                }
            }
        }

        let mut secret_vars = HashSet::new();
        let mut secret_names = HashSet::new();
        for secret in &self.secrets {
            if secret.length == 0 {
                return Err(format!("secret '{}' must have a positive length", secret.name));
            }
            if secret.env_var.trim().is_empty() {
                return Err(format!("secret '{}' has no env_var", secret.name));
            }
            if !secret_vars.insert(secret.env_var.as_str()) {
                return Err(format!("secret env_var '{}' is declared more than once", secret.env_var));
            }
            if !secret_names.insert(secret.name.as_str()) {
                return Err(format!("secret name '{}' is declared more than once", secret.name));
            }
            if env_vars.contains(&secret.env_var) {
                debug!("Secret '{}' overrides the answer of '{}'", secret.name, secret.env_var);
            }
        }

        Ok(())
    }
}

/// Parses descriptor content, trying JSON first and YAML second.
pub fn parse_definition(content: &str) -> Result<TemplateDefinition, String> {
    match serde_json::from_str(content) {
        Ok(definition) => Ok(definition),
        Err(json_err) => serde_yaml::from_str(content).map_err(|yaml_err| {
            format!("invalid descriptor (as JSON: {json_err}; as YAML: {yaml_err})")
        }),
    }
}
