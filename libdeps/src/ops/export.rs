//! Export operation - write the dependency script for a project.

use libdeps_export::{ExportOptions, ExportRequest, Result};
use libdeps_model::Project;

use crate::reports::{ExportReport, ExportResult};

/// Parameters for the export operation.
pub struct ExportParams<'a> {
    /// Destination and write mode.
    pub request: ExportRequest,
    /// Header tool name from the command line; wins over the project setting.
    pub generator: Option<&'a str>,
    /// Whether to render without writing.
    pub dry_run: bool,
}

/// Execute the export operation.
pub fn export(project: &Project, params: ExportParams) -> Result<ExportReport> {
    let options = ExportOptions {
        generator: params
            .generator
            .map(str::to_string)
            .or_else(|| project.config().generator.clone()),
    };

    let result = if params.dry_run {
        ExportResult::Preview {
            path: params.request.path,
            mode: params.request.mode,
            script: libdeps_export::render(project, &options),
        }
    } else {
        ExportResult::Written(libdeps_export::export(project, &params.request, &options)?)
    };

    Ok(ExportReport {
        project_name: project.config().name.clone(),
        result,
    })
}
