//! Export command report data structures.

use std::path::PathBuf;

use libdeps_core::{WriteMode, WriteResult};
use libdeps_export::ExportSummary;

use super::output::{Output, Report};

/// Report data from an export.
#[derive(Debug)]
pub struct ExportReport {
    /// Project name from libdeps.toml.
    pub project_name: Option<String>,
    /// What happened to the destination.
    pub result: ExportResult,
}

/// Result of an export.
#[derive(Debug)]
pub enum ExportResult {
    /// The destination was written (or found up to date).
    Written(ExportSummary),
    /// Dry-run preview.
    Preview {
        path: PathBuf,
        mode: WriteMode,
        script: String,
    },
}

impl Report for ExportReport {
    fn render(&self, out: &mut dyn Output) {
        if let Some(name) = &self.project_name {
            out.key_value("Project", name);
        }

        match &self.result {
            ExportResult::Written(summary) => {
                let verb = match summary.result {
                    WriteResult::Written => "Wrote",
                    WriteResult::Unchanged => "Unchanged",
                    WriteResult::Appended => "Appended to",
                };
                out.key_value(
                    verb,
                    &format!(
                        "{} ({} library targets)",
                        summary.path.display(),
                        summary.libraries
                    ),
                );
            }
            ExportResult::Preview { path, mode, script } => {
                out.divider(&path.display().to_string());
                out.preformatted(script);
                out.divider("Summary");
                let action = match mode {
                    WriteMode::CopyIfDifferent => "replace if different",
                    WriteMode::Append => "append",
                };
                out.preformatted(&format!("would {} {}", action, path.display()));
            }
        }
    }
}
