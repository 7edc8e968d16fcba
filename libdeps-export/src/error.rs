use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;

/// Reasons an export invocation fails.
///
/// Unresolvable dependency names and conflicting qualifiers are not errors.
#[derive(Debug, Error, Diagnostic)]
pub enum ExportError {
    #[error("{0}")]
    #[diagnostic(
        code(libdeps::usage),
        help("usage: export <file> [APPEND]")
    )]
    Usage(String),

    #[error("Error Writing {}", path.display())]
    #[diagnostic(code(libdeps::open))]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{}'", path.display())]
    #[diagnostic(code(libdeps::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<libdeps_core::Error> for ExportError {
    fn from(err: libdeps_core::Error) -> Self {
        match err {
            libdeps_core::Error::Open { path, source } => ExportError::Open { path, source },
            libdeps_core::Error::Write { path, source } => ExportError::Write { path, source },
        }
    }
}
