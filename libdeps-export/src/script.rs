//! Rendering of the generated dependency script.

use crate::{LibraryDependencies, ScriptBuilder};

/// Tool name written in the header when none is configured.
pub const DEFAULT_GENERATOR: &str = "CMake";

/// Condition selecting the new-style branch. Consumers evaluate it, we only
/// write it.
pub const VERSION_TEST: &str = "\"${CMAKE_MAJOR_VERSION}.${CMAKE_MINOR_VERSION}\" GREATER 2.4";

/// A rendered-on-demand dependency script.
///
/// ```text
/// # Generated by CMake
///
/// if("${CMAKE_MAJOR_VERSION}.${CMAKE_MINOR_VERSION}" GREATER 2.4)
///   # Information for CMake 2.6 and above.
///   set("Foo_LIB_DEPENDS" "general;bar;")
/// else()
///   # Information for CMake 2.4 and lower.
///   set("Foo_LIB_DEPENDS" "bar;")
/// endif()
/// ```
pub struct Script<'a> {
    generator: &'a str,
    deps: &'a LibraryDependencies,
}

impl<'a> Script<'a> {
    pub fn new(deps: &'a LibraryDependencies) -> Self {
        Self {
            generator: DEFAULT_GENERATOR,
            deps,
        }
    }

    /// Set the tool name used in the header comment.
    pub fn with_generator(mut self, generator: &'a str) -> Self {
        self.generator = generator;
        self
    }

    pub fn render(&self) -> String {
        ScriptBuilder::new()
            .comment(&format!("Generated by {}", self.generator))
            .blank()
            .block(&format!("if({})", VERSION_TEST), |b| {
                b.comment("Information for CMake 2.6 and above.")
                    .each(self.deps.new_style(), |b, (key, tokens)| {
                        b.set(key, &LibraryDependencies::value(tokens))
                    })
            })
            .block("else()", |b| {
                b.comment("Information for CMake 2.4 and lower.")
                    .each(self.deps.old_style(), |b, (key, tokens)| {
                        b.set(key, &LibraryDependencies::value(tokens))
                    })
                    .each(self.deps.link_types().emitted(), |b, (key, qualifier)| {
                        b.set(key, qualifier.as_str())
                    })
            })
            .line("endif()")
            .build()
    }
}
