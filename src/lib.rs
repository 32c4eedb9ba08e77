//! fixturepath - addressing and reuse for generated object trees.
//!
//! Parse textual paths such as `order.items[*].price` into [`Expression`]s,
//! compile them into [`NodeResolver`]s that select nodes of a generated tree,
//! and memoize generation artifacts with [`cache::GenerationCache`].
//!
//! ```
//! use fixturepath::document::node::PropertyNode;
//! use fixturepath::resolve;
//!
//! let root = PropertyNode::anonymous().with_child(
//!     PropertyNode::object("tags")
//!         .with_child(PropertyNode::element(0).with_value("a"))
//!         .with_child(PropertyNode::element(1).with_value("b")),
//! );
//! let nodes = resolve(&root, "tags[*]", false).unwrap();
//! assert_eq!(nodes.len(), 2);
//! ```

pub mod cache;
pub mod config;
pub mod document;
pub mod expression;
pub mod file;
pub mod overrides;
pub mod resolver;

pub use document::node::TreeNode;
pub use expression::{Expression, ExpressionError, IndexSelector, Segment};
pub use overrides::OverrideSet;
pub use resolver::{NextNodePredicate, NodeResolver, ResolveError};

use thiserror::Error;

/// Any failure of parsing followed by resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Expression(#[from] ExpressionError),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Parses `expression`, compiles it, and resolves it against `root`.
pub fn resolve<'a, N: TreeNode>(
    root: &'a N,
    expression: &str,
    strict: bool,
) -> Result<Vec<&'a N>, Error> {
    let expression = Expression::parse(expression)?;
    let mut resolver = NodeResolver::compile(&expression);
    if strict {
        resolver = resolver.strict();
    }
    Ok(resolver.resolve(root)?)
}
