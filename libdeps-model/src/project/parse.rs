//! Project parsing from files and strings.

use std::{path::Path, str::FromStr};

use serde::Deserialize;
use toml::Spanned;

use super::{Project, ProjectConfig, validate::validate_project};
use crate::{Directory, Error, Qualifier, Result, Target, TargetKind, error::SourceContext};

/// Document shape of libdeps.toml, before validation.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct RawProject {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default, rename = "directory")]
    pub directories: Vec<RawDirectory>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct RawDirectory {
    pub path: String,

    #[serde(default, rename = "target")]
    pub targets: Vec<RawTarget>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct RawTarget {
    pub name: Spanned<String>,
    pub kind: TargetKind,
    pub output_name: Option<String>,

    /// Supports both formats:
    /// - bare: `"zlib"` (general)
    /// - table: `{ library = "zlib", qualifier = "debug" }`
    #[serde(default)]
    pub links: Vec<RawLink>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum RawLink {
    Bare(String),
    Qualified(RawQualifiedLink),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct RawQualifiedLink {
    pub library: String,
    #[serde(default)]
    pub qualifier: Qualifier,
}

impl RawLink {
    pub fn library(&self) -> &str {
        match self {
            RawLink::Bare(library) => library,
            RawLink::Qualified(link) => &link.library,
        }
    }

    fn qualifier(&self) -> Qualifier {
        match self {
            RawLink::Bare(_) => Qualifier::General,
            RawLink::Qualified(link) => link.qualifier,
        }
    }
}

impl FromStr for Project {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_project(s, "libdeps.toml")
    }
}

impl Project {
    /// Parse a libdeps.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_project(&content, &path.display().to_string())
    }

    /// Parse a libdeps.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_project(content, filename)
    }
}

/// Parse a project from content with the given filename for error reporting.
pub fn parse_project(content: &str, filename: &str) -> Result<Project> {
    let source_ctx = SourceContext::new(content, filename);
    let raw: RawProject = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_project(&raw, &source_ctx)?;
    Ok(raw.into_project())
}

impl RawProject {
    fn into_project(self) -> Project {
        let directories = self
            .directories
            .into_iter()
            .map(RawDirectory::into_directory)
            .collect();
        Project::new(self.project, directories)
    }
}

impl RawDirectory {
    fn into_directory(self) -> Directory {
        self.targets
            .into_iter()
            .fold(Directory::new(self.path), |dir, raw| {
                dir.with_target(raw.into_target())
            })
    }
}

impl RawTarget {
    fn into_target(self) -> Target {
        let mut target = Target::new(self.name.into_inner(), self.kind);
        for link in &self.links {
            target = target.with_link(link.library(), link.qualifier());
        }
        if let Some(output_name) = self.output_name {
            target = target.with_output_name(output_name);
        }
        target
    }
}
