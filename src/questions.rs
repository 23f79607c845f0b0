//! Question engine.
//! Walks a template's questions and volumes, decides for each one whether the
//! user is asked, and records the resulting values in the environment map.

use crate::config::{Question, QuestionType, TemplateDefinition};
use crate::environment::EnvironmentMap;
use crate::error::Result;
use crate::prompt::Prompter;
use log::debug;

/// Outcome of the visibility rules for a single question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// The user is prompted, pre-filled with the default value
    Ask,
    /// The default value is used silently
    UseDefault,
}

impl Visibility {
    /// Decision table combining the Dockerfile gate and the advanced gate.
    ///
    /// | needs Dockerfile, none present | advanced, basic mode | result     |
    /// |--------------------------------|----------------------|------------|
    /// | true                           | any                  | UseDefault |
    /// | false                          | true                 | UseDefault |
    /// | false                          | false                | Ask        |
    pub fn of(question: &Question, has_dockerfile: bool, advanced_mode: bool) -> Self {
        let dockerfile_missing = question.with_dockerfile && !has_dockerfile;
        let hidden_advanced = question.advanced && !advanced_mode;

        match (dockerfile_missing, hidden_advanced) {
            (true, _) => Visibility::UseDefault,
            (false, true) => Visibility::UseDefault,
            (false, false) => Visibility::Ask,
        }
    }
}

fn ask(prompt: &dyn Prompter, question: &Question) -> Result<String> {
    match question.question_type {
        QuestionType::Boolean => {
            let default = question.default_value.parse::<bool>().unwrap_or(false);
            let answer = prompt.confirm(&question.text, default)?;
            Ok(answer.to_string())
        }
        QuestionType::Text => {
            prompt.input(&question.text, Some(&question.default_value), question.validator)
        }
    }
}

/// Answers every question and volume of `template`.
///
/// # Arguments
/// * `prompt` - Prompter used for the visible questions
/// * `template` - Definition whose questions and volumes are walked in order
/// * `advanced_mode` - Whether questions flagged as advanced are shown
/// * `env` - Map to fill, usually seeded with the project variables
///
/// # Returns
/// * `Result<EnvironmentMap>` - The map with exactly one entry per question and volume
///
/// # Errors
/// * `Error::InputAbortedError` if the user cancels a prompt
pub fn answer_questions(
    prompt: &dyn Prompter,
    template: &TemplateDefinition,
    advanced_mode: bool,
    mut env: EnvironmentMap,
) -> Result<EnvironmentMap> {
    let has_dockerfile = template.has_dockerfile();

    for question in template.all_questions() {
        let value = match Visibility::of(&question, has_dockerfile, advanced_mode) {
            Visibility::Ask => ask(prompt, &question)?,
            Visibility::UseDefault => {
                debug!("Using default for '{}'", question.env_var);
                question.default_value.clone()
            }
        };
        env.insert(question.env_var, value);
    }

    Ok(env)
}
