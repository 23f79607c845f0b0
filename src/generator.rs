//! Generation orchestration.
//! Sequences project naming, template selection, question answering,
//! materialization, substitution and secret generation for one run.

use crate::catalog::load_catalogs;
use crate::config::TemplateDefinition;
use crate::constants::{COMPOSE_FILE, ENV_FILE};
use crate::environment::EnvironmentMap;
use crate::error::{Error, Result};
use crate::materializer::{clean_destination, generated_paths, Materializer, MergePolicy};
use crate::prompt::Prompter;
use crate::questions::answer_questions;
use crate::runner::StackRunner;
use crate::secrets::{generate_secrets, print_secrets};
use crate::substitution::substitute_file;
use indexmap::IndexMap;
use log::debug;
use std::io;
use std::path::{Path, PathBuf};

/// Flags selected on the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Ask questions flagged as advanced
    pub advanced: bool,
    /// Bring the stack up after generation
    pub run: bool,
    /// Bring the stack up in the background; implies `run`
    pub detached: bool,
    /// Skip the confirmation before replacing a previously generated project
    pub force: bool,
}

/// Result of a run that used a predefined template.
#[derive(Debug)]
pub struct Generation {
    pub template: String,
    pub environment: EnvironmentMap,
    /// Generated secret values keyed by secret name
    pub secrets: IndexMap<String, String>,
}

pub struct Generator<'a> {
    prompt: &'a dyn Prompter,
    runner: &'a dyn StackRunner,
    catalog_roots: Vec<PathBuf>,
    output_root: PathBuf,
    options: GenerateOptions,
}

impl<'a> Generator<'a> {
    pub fn new<P: AsRef<Path>>(
        prompt: &'a dyn Prompter,
        runner: &'a dyn StackRunner,
        catalog_roots: Vec<PathBuf>,
        output_root: P,
        options: GenerateOptions,
    ) -> Self {
        Self {
            prompt,
            runner,
            catalog_roots,
            output_root: output_root.as_ref().to_path_buf(),
            options,
        }
    }

    /// Runs the whole generation pipeline once.
    ///
    /// # Returns
    /// * `Result<Option<Generation>>` - `None` when the user opted for a custom stack
    ///
    /// # Flow
    /// 1. Confirms replacing a previously generated project unless forced
    /// 2. Asks for the project name
    /// 3. Asks whether to use a predefined stack
    /// 4. Answers the template questions, copies and customizes the files
    /// 5. Generates and prints the secrets
    /// 6. Hands off to the stack runner if requested
    pub fn generate(&self) -> Result<Option<Generation>> {
        self.check_destination()?;

        println!("Welcome to Compose Generator!");
        println!("Please continue by answering a few questions:");
        println!();

        let project_name = self.prompt.input("What is the name of your project", None, None)?;
        let project_name = project_name.trim();
        if project_name.is_empty() {
            return Err(Error::ValidationError("You must specify a project name".to_string()));
        }
        let env = EnvironmentMap::for_project(project_name);

        let generation = if self.prompt.confirm("Do you want to use a predefined stack?", true)? {
            Some(self.generate_predefined(env)?)
        } else {
            println!("Let's create a custom stack for you!");
            None
        };

        if self.options.run || self.options.detached {
            println!();
            println!("Running the stack ...");
            self.runner.up(&self.output_root, self.options.detached)?;
        }

        Ok(generation)
    }

    fn check_destination(&self) -> Result<()> {
        if self.options.force {
            return Ok(());
        }
        let existing = generated_paths(&self.output_root).iter().any(|path| path.exists());
        if existing
            && !self.prompt.confirm(
                "The destination already contains a generated project. Replace it?",
                false,
            )?
        {
            return Err(Error::InputAbortedError(
                "the existing project was left untouched".to_string(),
            ));
        }
        Ok(())
    }

    fn select_template(&self) -> Result<TemplateDefinition> {
        let mut catalog = load_catalogs(&self.catalog_roots)?;
        if catalog.is_empty() {
            let location = self
                .catalog_roots
                .iter()
                .map(|root| root.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(Error::CatalogLoadError {
                location,
                reason: "no templates found".to_string(),
            });
        }

        let labels: Vec<String> = catalog.iter().map(|t| t.label.clone()).collect();
        let index = self.prompt.select("Predefined software stack", &labels)?;
        if index >= catalog.len() {
            return Err(Error::ValidationError(format!("no template at position {index}")));
        }
        Ok(catalog.swap_remove(index))
    }

    fn generate_predefined(&self, env: EnvironmentMap) -> Result<Generation> {
        let template = self.select_template()?;
        debug!("Using template '{}' from {}", template.label, template.source_dir.display());
        println!();

        let env = answer_questions(self.prompt, &template, self.options.advanced, env)?;
        println!();

        println!("Copying template ...");
        clean_destination(&self.output_root)?;
        let written = Materializer::new(MergePolicy::Replace)?.materialize(&template, &self.output_root)?;
        debug!("Copied {} files", written.len());

        println!("Applying customizations ...");
        let compose_file = self.output_root.join(COMPOSE_FILE);
        let env_file = self.output_root.join(ENV_FILE);
        substitute_file(&compose_file, &env)?;
        substitute_file(&env_file, &env)?;

        println!("Generating secrets ...");
        let secrets = generate_secrets(&env_file, &template.secrets)?;
        print_secrets(&mut io::stdout().lock(), &secrets)?;

        Ok(Generation { template: template.label, environment: env, secrets })
    }
}
