//! The environment map accumulates answers keyed by variable name.
//! It feeds the placeholder substitution of the generated files.

use crate::constants::{PROJECT_NAME_CONTAINER_VAR, PROJECT_NAME_VAR};
use indexmap::IndexMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentMap {
    vars: IndexMap<String, String>,
}

impl EnvironmentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a map seeded with the intrinsic project variables.
    pub fn for_project(project_name: &str) -> Self {
        let mut env = Self::new();
        env.insert(PROJECT_NAME_VAR, project_name);
        env.insert(PROJECT_NAME_CONTAINER_VAR, container_name(project_name));
        env
    }

    /// Inserts a value. An existing key keeps its position and gets the new value.
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) -> Option<String> {
        self.vars.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Derives the container-safe project name: lowercase, spaces replaced with hyphens.
pub fn container_name(project_name: &str) -> String {
    project_name.to_lowercase().replace(' ', "-")
}
