//! Project description types and parsing for libdeps.toml files.

mod parse;
mod validate;

use serde::Deserialize;

use crate::{Directory, TargetRegistry};

/// Settings from the `[project]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Informational project name
    pub name: Option<String>,

    /// Tool name written in the generated header comment
    pub generator: Option<String>,
}

/// A project model loaded from libdeps.toml
#[derive(Debug, Clone)]
pub struct Project {
    config: ProjectConfig,
    directories: Vec<Directory>,
}

impl Project {
    /// Create a project from already-built directories.
    pub fn new(config: ProjectConfig, directories: Vec<Directory>) -> Self {
        Self {
            config,
            directories,
        }
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }
}

impl TargetRegistry for Project {
    fn directories(&self) -> &[Directory] {
        &self.directories
    }
}
