//! File materialization.
//! Copies a template's file tree into the destination project directory,
//! leaving catalog metadata behind.

use crate::config::TemplateDefinition;
use crate::constants::{COMPOSE_FILE, ENV_FILE, IGNORED_PATTERNS, VOLUMES_DIR};
use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// How existing content in the destination is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergePolicy {
    /// Existing directories are emptied and replaced, existing files overwritten
    #[default]
    Replace,
    /// Files are copied over existing content, unrelated files are kept
    Merge,
    /// Any existing target fails the copy
    AbortOnConflict,
}

fn copy_error(path: &Path, source: io::Error) -> Error {
    Error::CopyError { path: path.display().to_string(), source }
}

/// Returns the paths a generation run owns inside `destination`.
pub fn generated_paths<P: AsRef<Path>>(destination: P) -> [PathBuf; 3] {
    let destination = destination.as_ref();
    [destination.join(COMPOSE_FILE), destination.join(ENV_FILE), destination.join(VOLUMES_DIR)]
}

/// Deletes the compose file, environment file and volumes directory left by a previous run.
///
/// # Errors
/// * `Error::CopyError` if an existing path cannot be removed
pub fn clean_destination<P: AsRef<Path>>(destination: P) -> Result<()> {
    for path in generated_paths(destination) {
        let removed = if path.is_dir() {
            fs::remove_dir_all(&path)
        } else if path.exists() {
            fs::remove_file(&path)
        } else {
            continue;
        };
        removed.map_err(|e| copy_error(&path, e))?;
        debug!("Removed '{}'", path.display());
    }
    Ok(())
}

/// Builds the set of authoring artifacts that are never copied.
pub fn ignored_patterns() -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in IGNORED_PATTERNS {
        let glob = Glob::new(pattern).map_err(|e| Error::IgnorePatternError(e.to_string()))?;
        builder.add(glob);
    }
    builder.build().map_err(|e| Error::IgnorePatternError(e.to_string()))
}

pub struct Materializer {
    policy: MergePolicy,
    ignored: GlobSet,
}

impl Materializer {
    pub fn new(policy: MergePolicy) -> Result<Self> {
        Ok(Self { policy, ignored: ignored_patterns()? })
    }

    pub fn policy(&self) -> MergePolicy {
        self.policy
    }

    /// Copies the file tree of `template` into `destination`.
    ///
    /// # Returns
    /// * `Result<Vec<PathBuf>>` - Files written, in traversal order
    ///
    /// # Errors
    /// * `Error::CopyError` if a directory or file cannot be created, or if a
    ///   target exists under `MergePolicy::AbortOnConflict`
    pub fn materialize<P: AsRef<Path>>(
        &self,
        template: &TemplateDefinition,
        destination: P,
    ) -> Result<Vec<PathBuf>> {
        self.copy_tree(&template.source_dir, destination.as_ref())
    }

    fn copy_tree(&self, source_root: &Path, destination: &Path) -> Result<Vec<PathBuf>> {
        debug!("Copying '{}' to '{}'", source_root.display(), destination.display());
        fs::create_dir_all(destination).map_err(|e| copy_error(destination, e))?;

        let mut written = Vec::new();
        // Parents are visited before their contents, so a replaced directory
        // is recreated before anything is copied into it.
        for entry in WalkDir::new(source_root).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(source_root).to_path_buf();
                copy_error(&path, e.into())
            })?;
            let relative = entry
                .path()
                .strip_prefix(source_root)
                .map_err(|e| copy_error(entry.path(), io::Error::other(e)))?;

            if self.ignored.is_match(relative) {
                debug!("Skipping metadata file '{}'", relative.display());
                continue;
            }

            let target = destination.join(relative);
            if entry.file_type().is_dir() {
                self.prepare_dir(&target)?;
            } else {
                self.copy_file(entry.path(), &target)?;
                written.push(target);
            }
        }

        Ok(written)
    }

    fn prepare_dir(&self, target: &Path) -> Result<()> {
        if target.exists() {
            match self.policy {
                MergePolicy::Replace => {
                    debug!("Replacing directory '{}'", target.display());
                    let removed = if target.is_dir() {
                        fs::remove_dir_all(target)
                    } else {
                        fs::remove_file(target)
                    };
                    removed.map_err(|e| copy_error(target, e))?;
                }
                MergePolicy::Merge => {}
                MergePolicy::AbortOnConflict => return Err(conflict(target)),
            }
        }
        fs::create_dir_all(target).map_err(|e| copy_error(target, e))
    }

    fn copy_file(&self, source: &Path, target: &Path) -> Result<()> {
        if target.exists() {
            match self.policy {
                MergePolicy::AbortOnConflict => return Err(conflict(target)),
                MergePolicy::Replace | MergePolicy::Merge if target.is_dir() => {
                    fs::remove_dir_all(target).map_err(|e| copy_error(target, e))?;
                }
                MergePolicy::Replace | MergePolicy::Merge => {}
            }
        }
        debug!("Copying file '{}'", target.display());
        fs::copy(source, target).map(|_| ()).map_err(|e| copy_error(target, e))
    }
}

fn conflict(target: &Path) -> Error {
    copy_error(target, io::Error::new(io::ErrorKind::AlreadyExists, "target already exists"))
}
