//! Core operations.
//!
//! This module contains the business logic for libdeps commands,
//! separated from CLI argument parsing and output rendering.

pub mod export;
pub mod list;

pub use export::export;
pub use list::list;
