//! Output-name substitution for dependency tokens.

use libdeps_model::TargetRegistry;

/// Maps dependency tokens to the artifact names written into dependency
/// lists.
///
/// Only a plain `output_name` override on a target with exactly the token's
/// name is honored. Tokens that name no target, or a target without an
/// override, pass through unchanged.
pub struct NameResolver<'a, R: ?Sized> {
    registry: &'a R,
}

impl<'a, R> NameResolver<'a, R>
where
    R: TargetRegistry + ?Sized,
{
    pub fn new(registry: &'a R) -> Self {
        Self { registry }
    }

    /// The token to write for `library`.
    pub fn resolve<'s>(&'s self, library: &'s str) -> &'s str {
        match self
            .registry
            .find_target(library)
            .and_then(|target| target.output_name())
        {
            Some(output_name) => {
                tracing::debug!("'{}' resolves to output name '{}'", library, output_name);
                output_name
            }
            None => library,
        }
    }
}
