//! Library target discovery.

use libdeps_model::{Target, TargetRegistry};

/// Collect the library targets of every directory, in discovery order.
///
/// Executables and other non-library kinds are skipped.
pub fn library_targets<R>(registry: &R) -> Vec<&Target>
where
    R: TargetRegistry + ?Sized,
{
    let mut libraries = Vec::new();
    for directory in registry.directories() {
        for target in directory.targets() {
            if target.is_library() {
                libraries.push(target);
            } else {
                tracing::debug!(
                    "skipping {} target '{}' in {}",
                    target.kind(),
                    target.name(),
                    directory.path().display()
                );
            }
        }
    }
    libraries
}
