//! Core utilities and types for the libdeps exporter.
//!
//! This crate provides the output file primitives shared across
//! the libdeps crates.

mod error;
mod file;

pub use error::{Error, Result};
// File operations
pub use file::{Append, CopyIfDifferent, File, FileWriter, WriteMode, WriteResult};
