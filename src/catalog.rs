//! Template catalog loading.
//! A catalog root holds one subdirectory per template. Each subdirectory
//! contains a descriptor next to the files that get copied.

use crate::config::{parse_definition, TemplateDefinition};
use crate::constants::{CONFIG_FILES, DEFAULT_TEMPLATES_DIR};
use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

fn load_error<P: AsRef<Path>, S: Into<String>>(location: P, reason: S) -> Error {
    Error::CatalogLoadError {
        location: location.as_ref().display().to_string(),
        reason: reason.into(),
    }
}

/// Returns the first descriptor found in `template_dir`.
pub fn find_descriptor<P: AsRef<Path>>(template_dir: P) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|file| template_dir.as_ref().join(file))
        .find(|path| path.is_file())
}

/// Returns the bundled catalog location: `templates/` next to the executable
/// when present, the system-wide location otherwise.
pub fn default_templates_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("templates")))
        .filter(|dir| dir.is_dir())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATES_DIR))
}

/// Reads, resolves and validates the definition stored in `descriptor`.
fn load_definition(root: &Path, template_dir: &Path, descriptor: &Path) -> Result<TemplateDefinition> {
    debug!("Loading template definition from {}", descriptor.display());
    let content = fs::read_to_string(descriptor).map_err(|e| load_error(descriptor, e.to_string()))?;
    let mut definition = parse_definition(&content).map_err(|e| load_error(descriptor, e))?;

    if definition.directory.trim().is_empty() {
        if let Some(name) = template_dir.file_name() {
            definition.directory = name.to_string_lossy().into_owned();
        }
    }
    definition.validate().map_err(|e| load_error(descriptor, e))?;

    let source_dir = root.join(&definition.directory).canonicalize().map_err(|e| {
        load_error(descriptor, format!("directory '{}' cannot be resolved: {}", definition.directory, e))
    })?;
    if !source_dir.is_dir() || source_dir == root || !source_dir.starts_with(root) {
        return Err(load_error(
            descriptor,
            format!("directory '{}' is not a directory inside the catalog", definition.directory),
        ));
    }
    definition.source_dir = source_dir;

    Ok(definition)
}

/// Loads every template definition found under `root`, ordered by directory name.
///
/// # Errors
/// * `Error::CatalogLoadError` if `root` is not a directory, or if a definition
///   cannot be parsed or violates its invariants. The error names the descriptor.
pub fn load_catalog<P: AsRef<Path>>(root: P) -> Result<Vec<TemplateDefinition>> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(load_error(root, "catalog directory does not exist"));
    }
    let root = root.canonicalize().map_err(|e| load_error(root, e.to_string()))?;

    let mut template_dirs = fs::read_dir(&root)
        .map_err(|e| load_error(&root, e.to_string()))?
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| load_error(&root, e.to_string()))?;
    template_dirs.retain(|path| path.is_dir());
    template_dirs.sort();

    let mut definitions = Vec::new();
    for template_dir in template_dirs {
        match find_descriptor(&template_dir) {
            Some(descriptor) => {
                definitions.push(load_definition(&root, &template_dir, &descriptor)?);
            }
            None => debug!("Skipping '{}', no descriptor found", template_dir.display()),
        }
    }

    Ok(definitions)
}

/// Loads several catalogs and concatenates them in the given order.
pub fn load_catalogs<P: AsRef<Path>>(roots: &[P]) -> Result<Vec<TemplateDefinition>> {
    let mut definitions = Vec::new();
    for root in roots {
        definitions.extend(load_catalog(root)?);
    }
    Ok(definitions)
}
