// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Build-description model consumed by the libdeps exporter.
//!
//! The model is a read-only view of a configured project: a sequence of
//! sub-configurations ([`Directory`]), each owning its targets in the order
//! they were declared. [`Project`] loads such a model from a `libdeps.toml`
//! file; any other source can be plugged in through [`TargetRegistry`].

mod error;
mod project;
mod registry;
mod target;

pub use error::{Error, Result, SourceContext};
pub use project::{Project, ProjectConfig};
pub use registry::{Directory, TargetRegistry};
pub use target::{LinkEntry, Qualifier, Target, TargetKind};
