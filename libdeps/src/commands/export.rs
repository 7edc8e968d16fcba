use std::path::{Path, PathBuf};

use clap::Args;
use eyre::Result;
use libdeps_export::ExportRequest;
use libdeps_model::{Project, TargetRegistry};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ExportCommand {
    /// Path to the project description (defaults to ./libdeps.toml)
    #[arg(short, long, default_value = "libdeps.toml")]
    pub project: PathBuf,

    /// Tool name for the header comment (overrides the project setting)
    #[arg(long)]
    pub generator: Option<String>,

    /// Print the script instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Destination file, optionally followed by APPEND
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,
}

impl ExportCommand {
    pub fn run(&self) -> Result<()> {
        let (request, project) = self.prepare(|path| Project::from_file(path)).unwrap_or_exit();
        let project = project.unwrap_or_exit();
        tracing::debug!(
            "loaded {} with {} directories",
            self.project.display(),
            project.directories().len()
        );

        let report = ops::export(
            &project,
            ops::export::ExportParams {
                request,
                generator: self.generator.as_deref(),
                dry_run: self.dry_run,
            },
        )
        .unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    /// Validate the invocation, then hand the project path to `load`.
    fn prepare<P>(
        &self,
        load: impl FnOnce(&Path) -> P,
    ) -> libdeps_export::Result<(ExportRequest, P)> {
        let request = ExportRequest::from_args(&self.args)?;
        Ok((request, load(&self.project)))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use libdeps_core::WriteMode;
    use libdeps_export::ExportError;

    use super::*;

    fn command(args: &[&str]) -> ExportCommand {
        ExportCommand {
            project: PathBuf::from("/nonexistent/libdeps.toml"),
            generator: None,
            dry_run: false,
            args: args.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_usage_error_before_project_is_read() {
        let loaded = Cell::new(false);

        let err = command(&[])
            .prepare(|_| loaded.set(true))
            .unwrap_err();

        assert!(matches!(err, ExportError::Usage(_)));
        assert!(!loaded.get());
    }

    #[test]
    fn test_project_is_read_after_valid_invocation() {
        let loaded = Cell::new(false);

        let (request, path) = command(&["deps.cmake", "APPEND"])
            .prepare(|path| {
                loaded.set(true);
                path.to_path_buf()
            })
            .unwrap();

        assert!(loaded.get());
        assert_eq!(path, PathBuf::from("/nonexistent/libdeps.toml"));
        assert_eq!(request.mode, WriteMode::Append);
        assert_eq!(request.path, PathBuf::from("deps.cmake"));
    }
}
