// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Library link dependency export.
//!
//! Walks every library target of a [`TargetRegistry`], records its direct
//! link dependencies, and renders them as a version-gated CMake script that
//! older and newer consumers can both `include()`.
//!
//! # Module Organization
//!
//! - [`collector`] - Library target discovery
//! - [`link_types`] - Project-wide qualifier merging
//! - [`resolver`] - Output-name substitution
//! - [`dependencies`] - The three variable maps
//! - [`script`] - Rendering of the generated script
//! - [`export`] - Invocation parsing and writing
//!
//! [`TargetRegistry`]: libdeps_model::TargetRegistry

pub mod builder;
pub mod collector;
pub mod dependencies;
mod error;
pub mod export;
pub mod link_types;
pub mod resolver;
pub mod script;

pub use builder::ScriptBuilder;
pub use collector::library_targets;
pub use dependencies::{LIB_DEPENDS_SUFFIX, LINK_TYPE_SUFFIX, LibraryDependencies};
pub use error::{ExportError, Result};
pub use export::{ExportOptions, ExportRequest, ExportSummary, export, render};
pub use link_types::LinkTypes;
pub use resolver::NameResolver;
pub use script::{DEFAULT_GENERATOR, Script, VERSION_TEST};
