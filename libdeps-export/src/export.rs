//! Invocation parsing and the export entry points.

use std::path::PathBuf;

use libdeps_core::{File, WriteMode, WriteResult};
use libdeps_model::TargetRegistry;

use crate::{DEFAULT_GENERATOR, ExportError, LibraryDependencies, Result, Script};

/// Second argument that switches to append mode.
pub const APPEND_MARKER: &str = "APPEND";

/// Where and how to write the script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub path: PathBuf,
    pub mode: WriteMode,
}

impl ExportRequest {
    pub fn new(path: impl Into<PathBuf>, mode: WriteMode) -> Self {
        Self {
            path: path.into(),
            mode,
        }
    }

    /// Parse `<file> [APPEND]`.
    ///
    /// Anything other than the exact `APPEND` marker in second position
    /// selects copy-if-different. Extra arguments are ignored.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        let Some(path) = args.first() else {
            return Err(ExportError::Usage(
                "called with incorrect number of arguments".to_string(),
            ));
        };
        let append = args
            .get(1)
            .is_some_and(|arg| arg.as_ref() == APPEND_MARKER);

        Ok(Self::new(path.as_ref(), WriteMode::from_append(append)))
    }
}

/// Settings that shape the rendered script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Tool name for the header comment; [`DEFAULT_GENERATOR`] when unset.
    pub generator: Option<String>,
}

impl ExportOptions {
    pub fn generator(&self) -> &str {
        self.generator.as_deref().unwrap_or(DEFAULT_GENERATOR)
    }
}

/// What an export did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub result: WriteResult,
    /// Library targets visited.
    pub libraries: usize,
}

/// Render the script for `registry` without writing it.
pub fn render<R>(registry: &R, options: &ExportOptions) -> String
where
    R: TargetRegistry + ?Sized,
{
    let deps = LibraryDependencies::collect(registry);
    Script::new(&deps)
        .with_generator(options.generator())
        .render()
}

/// Render the script for `registry` and write it as `request` asks.
pub fn export<R>(
    registry: &R,
    request: &ExportRequest,
    options: &ExportOptions,
) -> Result<ExportSummary>
where
    R: TargetRegistry + ?Sized,
{
    let deps = LibraryDependencies::collect(registry);
    let content = Script::new(&deps)
        .with_generator(options.generator())
        .render();

    let result = File::new(&request.path, content)
        .with_mode(request.mode)
        .write()?;

    tracing::info!(
        "{}: {:?} ({} library targets)",
        request.path.display(),
        result,
        deps.library_count()
    );

    Ok(ExportSummary {
        path: request.path.clone(),
        result,
        libraries: deps.library_count(),
    })
}
