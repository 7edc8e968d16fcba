use std::path::PathBuf;

use thiserror::Error;

/// Result type for file writing operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failure while producing an output file.
#[derive(Debug, Error)]
pub enum Error {
    /// The output stream could not be opened.
    #[error("Error Writing {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stream was opened but writing or promoting the content failed.
    #[error("failed to write '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// The path the failed operation targeted.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Error::Open { path, .. } | Error::Write { path, .. } => path,
        }
    }
}
