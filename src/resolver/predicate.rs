//! Single-step node predicates.

use std::fmt;

use crate::document::node::TreeNode;
use crate::expression::{name_matches, IndexSelector};

/// A test applied to a candidate child node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NextNodePredicate {
    /// Passes children whose resolved name matches. Unnamed children pass.
    PropertyName(String),
    /// Passes children whose position matches. Unpositioned children pass.
    ContainerElement(IndexSelector),
}

impl NextNodePredicate {
    pub fn test<N: TreeNode>(&self, node: &N) -> bool {
        match self {
            NextNodePredicate::PropertyName(name) => node
                .resolved_name()
                .map_or(true, |resolved| name_matches(name, resolved)),
            NextNodePredicate::ContainerElement(index) => node
                .position()
                .map_or(true, |position| index.matches_position(position)),
        }
    }
}

impl fmt::Display for NextNodePredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NextNodePredicate::PropertyName(name) => write!(f, "name == {}", name),
            NextNodePredicate::ContainerElement(index) => write!(f, "index == {}", index),
        }
    }
}
