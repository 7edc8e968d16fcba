//! Project-wide merging of link qualifiers.
//!
//! Every dependency token gets a single `<token>_LINK_TYPE` entry no matter
//! how many targets link it. The first observed qualifier seeds the entry and
//! any later observation that disagrees collapses it to `general`. Collapsed
//! entries are dropped at render time, so conflicting information is lost on
//! purpose: `general` is what old consumers assume when no entry exists.

use std::collections::{BTreeMap, btree_map::Entry};

use libdeps_model::Qualifier;

use crate::LINK_TYPE_SUFFIX;

/// Merged qualifier per dependency, keyed by `<token>_LINK_TYPE`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkTypes {
    entries: BTreeMap<String, Qualifier>,
}

impl LinkTypes {
    pub fn new() -> Self {
        Self::default()
    }

    /// The variable name for a dependency token.
    pub fn key(library: &str) -> String {
        format!("{}{}", library, LINK_TYPE_SUFFIX)
    }

    /// Record one link of `library` with `qualifier`.
    pub fn observe(&mut self, library: &str, qualifier: Qualifier) {
        match self.entries.entry(Self::key(library)) {
            Entry::Vacant(entry) => {
                entry.insert(qualifier);
            }
            Entry::Occupied(mut entry) => {
                if *entry.get() != qualifier {
                    tracing::debug!(
                        "'{}' linked as both {} and {}, falling back to general",
                        library,
                        entry.get(),
                        qualifier
                    );
                    entry.insert(Qualifier::General);
                }
            }
        }
    }

    /// Merged qualifier for a dependency token, if it was observed.
    pub fn get(&self, library: &str) -> Option<Qualifier> {
        self.entries.get(&Self::key(library)).copied()
    }

    /// All merged entries in key order, including `general` ones.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Qualifier)> {
        self.entries.iter().map(|(k, q)| (k.as_str(), *q))
    }

    /// Entries that need to be written: everything not `general`.
    pub fn emitted(&self) -> impl Iterator<Item = (&str, Qualifier)> {
        self.iter().filter(|(_, q)| *q != Qualifier::General)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
