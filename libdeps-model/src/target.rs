//! Targets and their link entries.

use std::fmt;

use serde::Deserialize;

/// Classification of a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Executable,
    Static,
    Shared,
    Module,
    Object,
    Utility,
    Interface,
}

impl TargetKind {
    /// Get the name used in libdeps.toml
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::Executable => "executable",
            TargetKind::Static => "static",
            TargetKind::Shared => "shared",
            TargetKind::Module => "module",
            TargetKind::Object => "object",
            TargetKind::Utility => "utility",
            TargetKind::Interface => "interface",
        }
    }

    /// Static, shared and module libraries are the only library kinds.
    pub fn is_library(&self) -> bool {
        matches!(
            self,
            TargetKind::Static | TargetKind::Shared | TargetKind::Module
        )
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration scope of a link dependency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Qualifier {
    /// Linked in every configuration
    #[default]
    General,
    /// Linked in debug configurations only
    Debug,
    /// Linked in optimized configurations only
    Optimized,
}

impl Qualifier {
    /// The token written into generated scripts
    pub fn as_str(&self) -> &'static str {
        match self {
            Qualifier::General => "general",
            Qualifier::Debug => "debug",
            Qualifier::Optimized => "optimized",
        }
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A direct link dependency as written by the target author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    /// Library or target name
    pub library: String,
    pub qualifier: Qualifier,
}

impl LinkEntry {
    pub fn new(library: impl Into<String>, qualifier: Qualifier) -> Self {
        Self {
            library: library.into(),
            qualifier,
        }
    }
}

/// A buildable artifact definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    name: String,
    kind: TargetKind,
    links: Vec<LinkEntry>,
    output_name: Option<String>,
}

impl Target {
    /// Create a target with no link entries.
    pub fn new(name: impl Into<String>, kind: TargetKind) -> Self {
        Self {
            name: name.into(),
            kind,
            links: Vec::new(),
            output_name: None,
        }
    }

    /// Add a link entry.
    pub fn with_link(mut self, library: impl Into<String>, qualifier: Qualifier) -> Self {
        self.links.push(LinkEntry::new(library, qualifier));
        self
    }

    /// Set the output-name override.
    pub fn with_output_name(mut self, output_name: impl Into<String>) -> Self {
        self.output_name = Some(output_name.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TargetKind {
        self.kind
    }

    /// Direct link entries in declaration order.
    pub fn links(&self) -> &[LinkEntry] {
        &self.links
    }

    /// On-disk artifact name, if it differs from the target name.
    pub fn output_name(&self) -> Option<&str> {
        self.output_name.as_deref()
    }

    pub fn is_library(&self) -> bool {
        self.kind.is_library()
    }
}
