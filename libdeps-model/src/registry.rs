//! The read-only registry interface consumed by the exporter.

use std::path::{Path, PathBuf};

use crate::Target;

/// One sub-configuration of a project and the targets it defines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    path: PathBuf,
    targets: Vec<Target>,
}

impl Directory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            targets: Vec::new(),
        }
    }

    /// Add a target after those already defined.
    pub fn with_target(mut self, target: Target) -> Self {
        self.targets.push(target);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Targets in declaration order.
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }
}

/// A finalized set of targets spread across sub-configurations.
pub trait TargetRegistry {
    /// Sub-configurations in discovery order.
    fn directories(&self) -> &[Directory];

    /// Find a target by exact name.
    ///
    /// When several directories define the same name, the first one in
    /// discovery order wins.
    fn find_target(&self, name: &str) -> Option<&Target> {
        self.directories()
            .iter()
            .flat_map(Directory::targets)
            .find(|target| target.name() == name)
    }
}

impl TargetRegistry for [Directory] {
    fn directories(&self) -> &[Directory] {
        self
    }
}

impl TargetRegistry for Vec<Directory> {
    fn directories(&self) -> &[Directory] {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TargetKind;

    #[test]
    fn test_find_target_across_directories() {
        let registry = vec![
            Directory::new("a").with_target(Target::new("foo", TargetKind::Static)),
            Directory::new("b").with_target(Target::new("bar", TargetKind::Executable)),
        ];

        assert_eq!(
            registry.find_target("bar").map(Target::kind),
            Some(TargetKind::Executable)
        );
        assert!(registry.find_target("baz").is_none());
        assert!(registry.find_target("Foo").is_none());
    }

    #[test]
    fn test_find_target_first_match_wins() {
        let registry = vec![
            Directory::new("a")
                .with_target(Target::new("foo", TargetKind::Static).with_output_name("first")),
            Directory::new("b")
                .with_target(Target::new("foo", TargetKind::Shared).with_output_name("second")),
        ];

        let found = registry.find_target("foo").unwrap();
        assert_eq!(found.output_name(), Some("first"));
    }
}
