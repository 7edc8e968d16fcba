//! The variable maps written into the generated script.

use std::collections::BTreeMap;

use libdeps_model::{Target, TargetRegistry};

use crate::{LinkTypes, NameResolver, library_targets};

/// Suffix of the per-target dependency list variable.
pub const LIB_DEPENDS_SUFFIX: &str = "_LIB_DEPENDS";

/// Suffix of the per-dependency qualifier variable.
pub const LINK_TYPE_SUFFIX: &str = "_LINK_TYPE";

/// Direct link dependencies of every library target in a registry.
///
/// Token lists are kept as separate tokens and only joined by
/// [`LibraryDependencies::value`] when rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryDependencies {
    /// `<target>_LIB_DEPENDS` -> `[qualifier, library, qualifier, library, ...]`
    new_style: BTreeMap<String, Vec<String>>,
    /// `<target>_LIB_DEPENDS` -> `[library, library, ...]`
    old_style: BTreeMap<String, Vec<String>>,
    link_types: LinkTypes,
    libraries: usize,
}

impl LibraryDependencies {
    /// Gather dependency information for all library targets.
    pub fn collect<R>(registry: &R) -> Self
    where
        R: TargetRegistry + ?Sized,
    {
        let resolver = NameResolver::new(registry);
        let mut deps = Self::default();

        for target in library_targets(registry) {
            deps.add_target(target, &resolver);
        }
        deps
    }

    fn add_target<R>(&mut self, target: &Target, resolver: &NameResolver<'_, R>)
    where
        R: TargetRegistry + ?Sized,
    {
        let mut new_tokens = Vec::with_capacity(target.links().len() * 2);
        let mut old_tokens = Vec::with_capacity(target.links().len());

        for link in target.links() {
            let library = resolver.resolve(&link.library);
            new_tokens.push(link.qualifier.as_str().to_string());
            new_tokens.push(library.to_string());
            old_tokens.push(library.to_string());

            // Keyed by the token as written, not the resolved name
            self.link_types.observe(&link.library, link.qualifier);
        }

        // A later target with the same name replaces the earlier one
        let key = Self::key(target.name());
        self.new_style.insert(key.clone(), new_tokens);
        self.old_style.insert(key, old_tokens);
        self.libraries += 1;
    }

    /// The variable name for a target.
    pub fn key(target: &str) -> String {
        format!("{}{}", target, LIB_DEPENDS_SUFFIX)
    }

    /// Join tokens into a list value: every token followed by `;`.
    pub fn value(tokens: &[String]) -> String {
        tokens.iter().map(|token| format!("{};", token)).collect()
    }

    /// New-style entries in key order, with empty lists skipped.
    pub fn new_style(&self) -> impl Iterator<Item = (&str, &[String])> {
        non_empty(&self.new_style)
    }

    /// Old-style entries in key order, with empty lists skipped.
    pub fn old_style(&self) -> impl Iterator<Item = (&str, &[String])> {
        non_empty(&self.old_style)
    }

    pub fn link_types(&self) -> &LinkTypes {
        &self.link_types
    }

    /// Number of library targets visited, including ones without links.
    pub fn library_count(&self) -> usize {
        self.libraries
    }
}

fn non_empty(map: &BTreeMap<String, Vec<String>>) -> impl Iterator<Item = (&str, &[String])> {
    map.iter()
        .filter(|(_, tokens)| !tokens.is_empty())
        .map(|(key, tokens)| (key.as_str(), tokens.as_slice()))
}
