use thiserror::Error;

/// Errors raised while resolving an expression against a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A strict resolver matched no nodes.
    #[error("No matching results for expression '{expression}'")]
    NoMatch { expression: String },
}
