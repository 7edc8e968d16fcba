//! List command report data structures.

use super::output::{Output, Report};

/// Report data for the library targets of a project.
#[derive(Debug)]
pub struct ListReport {
    /// Project name from libdeps.toml.
    pub project_name: Option<String>,
    /// Library targets in discovery order.
    pub libraries: Vec<LibraryInfo>,
    /// Link type variables that an export would write.
    pub link_types: Vec<(String, String)>,
}

/// A library target and its direct dependencies.
#[derive(Debug)]
pub struct LibraryInfo {
    pub name: String,
    pub kind: String,
    /// `<resolved name> (<qualifier>)` per link entry.
    pub dependencies: Vec<String>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if let Some(name) = &self.project_name {
            out.key_value("Project", name);
            out.newline();
        }

        if self.libraries.is_empty() {
            out.preformatted("No library targets defined");
            return;
        }

        for library in &self.libraries {
            out.section(&format!("{} ({})", library.name, library.kind));
            if library.dependencies.is_empty() {
                out.list_item("(no dependencies)");
            }
            for dep in &library.dependencies {
                out.list_item(dep);
            }
        }

        if !self.link_types.is_empty() {
            out.newline();
            out.section("Link types");
            for (key, value) in &self.link_types {
                out.list_item(&format!("{} = {}", key, value));
            }
        }
    }
}
