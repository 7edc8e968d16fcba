//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod export;
mod list;
mod output;

pub use export::{ExportReport, ExportResult};
pub use list::{LibraryInfo, ListReport};
pub use output::{Report, TerminalOutput};
