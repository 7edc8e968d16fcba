//! Structural checks that serde cannot express.

use std::collections::HashMap;

use super::parse::{RawDirectory, RawProject};
use crate::{Result, error::SourceContext};

/// Validate the project after parsing.
pub(super) fn validate_project(raw: &RawProject, ctx: &SourceContext) -> Result<()> {
    for directory in &raw.directories {
        validate_directory(directory, ctx)?;
    }
    Ok(())
}

fn validate_directory(directory: &RawDirectory, ctx: &SourceContext) -> Result<()> {
    let mut seen: HashMap<&str, std::ops::Range<usize>> = HashMap::new();

    for target in &directory.targets {
        let name = target.name.get_ref().as_str();
        let span = target.name.span();

        if name.is_empty() {
            return Err(ctx.validation_error_at("target name cannot be empty", span));
        }

        if target.links.iter().any(|link| link.library().is_empty()) {
            return Err(ctx.validation_error_at(
                format!("target '{}' links an empty library name", name),
                span,
            ));
        }

        if let Some(first) = seen.get(name) {
            return Err(ctx.duplicate_target_error(
                name,
                &directory.path,
                first.clone(),
                span,
            ));
        }
        seen.insert(name, span);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::{Error, Project};

    #[test]
    fn test_empty_target_name() {
        let err = Project::from_str(
            r#"
            [[directory]]
            path = "."

            [[directory.target]]
            name = ""
            kind = "static"
            "#,
        )
        .unwrap_err();

        match *err {
            Error::Validation { message, span, .. } => {
                assert_eq!(message, "target name cannot be empty");
                assert!(span.is_some());
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_link_library() {
        let err = Project::from_str(
            r#"
            [[directory]]
            path = "."

            [[directory.target]]
            name = "Foo"
            kind = "static"
            links = ["bar", ""]
            "#,
        )
        .unwrap_err();

        match *err {
            Error::Validation { message, .. } => {
                assert_eq!(message, "target 'Foo' links an empty library name");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_target_in_directory() {
        let src = r#"
            [[directory]]
            path = "lib"

            [[directory.target]]
            name = "Foo"
            kind = "static"

            [[directory.target]]
            name = "Foo"
            kind = "shared"
            "#;
        let err = Project::from_str(src).unwrap_err();

        match *err {
            Error::DuplicateTarget {
                name,
                directory,
                first_span,
                second_span,
                ..
            } => {
                assert_eq!(name, "Foo");
                assert_eq!(directory, "lib");
                assert!(first_span.offset() < second_span.offset());
            }
            other => panic!("expected duplicate target error, got {other:?}"),
        }
    }

    #[test]
    fn test_same_name_in_different_directories_is_allowed() {
        let project = Project::from_str(
            r#"
            [[directory]]
            path = "a"

            [[directory.target]]
            name = "Foo"
            kind = "static"

            [[directory]]
            path = "b"

            [[directory.target]]
            name = "Foo"
            kind = "static"
            "#,
        );

        assert!(project.is_ok());
    }
}
