//! Strict mode: an empty match becomes an error.

use super::{NodeResolver, ResolveError};
use crate::document::node::TreeNode;

impl NodeResolver {
    /// Wraps this resolver so that zero matches fail with `NoMatch`.
    ///
    /// Wrapping an already strict resolver returns it unchanged.
    pub fn strict(self) -> Self {
        match self {
            strict @ NodeResolver::Strict(_) => strict,
            other => NodeResolver::Strict(Box::new(other)),
        }
    }

    pub fn is_strict(&self) -> bool {
        matches!(self, NodeResolver::Strict(_))
    }

    pub(super) fn resolve_strict<'a, N: TreeNode>(
        &self,
        inner: &NodeResolver,
        node: &'a N,
    ) -> Result<Vec<&'a N>, ResolveError> {
        let selected = inner.resolve(node)?;
        if selected.is_empty() {
            tracing::debug!(expression = %self, "strict resolver matched nothing");
            return Err(ResolveError::NoMatch {
                expression: self.to_string(),
            });
        }
        Ok(selected)
    }
}
