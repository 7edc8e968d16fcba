//! List operation - show what an export would record.

use libdeps_export::{LibraryDependencies, NameResolver, library_targets};
use libdeps_model::Project;

use crate::reports::{LibraryInfo, ListReport};

/// Gather library targets with their resolved dependencies.
pub fn list(project: &Project) -> ListReport {
    let resolver = NameResolver::new(project);

    let libraries = library_targets(project)
        .into_iter()
        .map(|target| LibraryInfo {
            name: target.name().to_string(),
            kind: target.kind().to_string(),
            dependencies: target
                .links()
                .iter()
                .map(|link| format!("{} ({})", resolver.resolve(&link.library), link.qualifier))
                .collect(),
        })
        .collect();

    let deps = LibraryDependencies::collect(project);
    let link_types = deps
        .link_types()
        .emitted()
        .map(|(key, qualifier)| (key.to_string(), qualifier.to_string()))
        .collect();

    ListReport {
        project_name: project.config().name.clone(),
        libraries,
        link_types,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_resolves_and_filters() {
        let project: Project = r#"
            [[directory]]
            path = "."

            [[directory.target]]
            name = "app"
            kind = "executable"
            links = ["Foo"]

            [[directory.target]]
            name = "Foo"
            kind = "shared"
            links = ["bar", { library = "z", qualifier = "debug" }]

            [[directory.target]]
            name = "bar"
            kind = "static"
            output_name = "bar_s"
        "#
        .parse()
        .unwrap();

        let report = list(&project);

        let names: Vec<&str> = report.libraries.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Foo", "bar"]);
        assert_eq!(
            report.libraries[0].dependencies,
            vec!["bar_s (general)", "z (debug)"]
        );
        assert_eq!(report.libraries[0].kind, "shared");
        assert_eq!(
            report.link_types,
            vec![("z_LINK_TYPE".to_string(), "debug".to_string())]
        );
    }
}
