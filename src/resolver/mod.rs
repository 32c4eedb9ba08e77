//! Compiles expressions into node resolvers and runs them against a tree.
//!
//! A resolver maps one node to an ordered list of matched nodes. Resolvers
//! compose: `Composite(outer, inner)` runs `inner` against each result of
//! `outer` and concatenates, preserving outer order and then inner order.
//!
//! # Example
//!
//! ```
//! use fixturepath::document::node::PropertyNode;
//! use fixturepath::expression::Expression;
//! use fixturepath::resolver::NodeResolver;
//!
//! let root = PropertyNode::object("person").with_child(
//!     PropertyNode::object("addresses")
//!         .with_child(PropertyNode::element(0))
//!         .with_child(PropertyNode::element(1)),
//! );
//! let resolver = NodeResolver::compile(&Expression::parse("addresses[1]").unwrap());
//! let matched = resolver.resolve(&root).unwrap();
//! assert_eq!(matched.len(), 1);
//! ```

pub mod error;
pub mod predicate;
pub mod strict;

pub use error::ResolveError;
pub use predicate::NextNodePredicate;

use std::fmt;

use crate::document::node::TreeNode;
use crate::expression::{Expression, IndexSelector, Segment, SELF_TOKEN};

/// A compiled, composable node selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeResolver {
    /// Returns the node itself.
    Identity,
    /// Children whose resolved name matches.
    NameMatch(String),
    /// Children whose position matches.
    IndexMatch(IndexSelector),
    /// Runs the second resolver against every result of the first.
    Composite(Box<NodeResolver>, Box<NodeResolver>),
    /// Fails when the inner resolver matches nothing.
    Strict(Box<NodeResolver>),
}

impl NodeResolver {
    /// Compiles an expression, folding segments left to right.
    ///
    /// The empty expression compiles to `Identity`.
    pub fn compile(expression: &Expression) -> Self {
        expression
            .segments()
            .iter()
            .map(Self::compile_segment)
            .reduce(Self::composite)
            .unwrap_or(NodeResolver::Identity)
    }

    fn compile_segment(segment: &Segment) -> Self {
        let head = if segment.is_self() {
            NodeResolver::Identity
        } else {
            NodeResolver::NameMatch(segment.name().to_string())
        };
        segment
            .indices()
            .iter()
            .fold(head, |resolver, index| {
                Self::composite(resolver, NodeResolver::IndexMatch(*index))
            })
    }

    pub fn composite(outer: NodeResolver, inner: NodeResolver) -> Self {
        NodeResolver::Composite(Box::new(outer), Box::new(inner))
    }

    /// Resolves against `node`, returning matches in tree order.
    ///
    /// Only `Strict` resolvers can fail; everything else treats an empty
    /// result as a valid outcome.
    pub fn resolve<'a, N: TreeNode>(&self, node: &'a N) -> Result<Vec<&'a N>, ResolveError> {
        match self {
            NodeResolver::Identity => Ok(vec![node]),
            NodeResolver::NameMatch(_) | NodeResolver::IndexMatch(_) => {
                let predicates = self.next_predicates();
                Ok(node
                    .children()
                    .iter()
                    .filter(|child| predicates.iter().all(|p| p.test(*child)))
                    .collect())
            }
            NodeResolver::Composite(outer, inner) => {
                let mut results = Vec::new();
                for selected in outer.resolve(node)? {
                    results.extend(inner.resolve(selected)?);
                }
                Ok(results)
            }
            NodeResolver::Strict(inner) => self.resolve_strict(inner, node),
        }
    }

    /// The predicates this resolver applies, in order, without running it.
    pub fn next_predicates(&self) -> Vec<NextNodePredicate> {
        match self {
            NodeResolver::Identity => Vec::new(),
            NodeResolver::NameMatch(name) => vec![NextNodePredicate::PropertyName(name.clone())],
            NodeResolver::IndexMatch(index) => vec![NextNodePredicate::ContainerElement(*index)],
            NodeResolver::Composite(outer, inner) => {
                let mut predicates = outer.next_predicates();
                predicates.extend(inner.next_predicates());
                predicates
            }
            NodeResolver::Strict(inner) => inner.next_predicates(),
        }
    }
}

impl From<&Expression> for NodeResolver {
    fn from(expression: &Expression) -> Self {
        NodeResolver::compile(expression)
    }
}

/// Renders the resolver back to expression syntax.
impl fmt::Display for NodeResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeResolver::Identity => f.write_str(SELF_TOKEN),
            NodeResolver::NameMatch(name) => f.write_str(name),
            NodeResolver::IndexMatch(index) => write!(f, "[{}]", index),
            NodeResolver::Composite(outer, inner) => match inner.as_ref() {
                NodeResolver::IndexMatch(_) => write!(f, "{}{}", outer, inner),
                _ => write!(f, "{}.{}", outer, inner),
            },
            NodeResolver::Strict(inner) => write!(f, "{}", inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::node::PropertyNode;

    fn person() -> PropertyNode {
        PropertyNode::object("person")
            .with_child(PropertyNode::leaf("name", "Alice"))
            .with_child(
                PropertyNode::object("addresses")
                    .with_child(PropertyNode::element(0).with_value("a0"))
                    .with_child(PropertyNode::element(1).with_value("a1"))
                    .with_child(PropertyNode::element(2).with_value("a2")),
            )
    }

    fn compile(s: &str) -> NodeResolver {
        NodeResolver::compile(&Expression::parse(s).unwrap())
    }

    fn values<'a>(nodes: &[&'a PropertyNode]) -> Vec<Option<&'a str>> {
        nodes.iter().map(|n| n.value()).collect()
    }

    #[test]
    fn test_compile_name_with_index() {
        assert_eq!(
            compile("addresses[1]"),
            NodeResolver::composite(
                NodeResolver::NameMatch("addresses".to_string()),
                NodeResolver::IndexMatch(IndexSelector::Position(1)),
            )
        );
    }

    #[test]
    fn test_compile_self_is_identity() {
        assert_eq!(compile("$"), NodeResolver::Identity);
        assert_eq!(
            compile("$[0]"),
            NodeResolver::composite(
                NodeResolver::Identity,
                NodeResolver::IndexMatch(IndexSelector::Position(0)),
            )
        );
    }

    #[test]
    fn test_compile_left_to_right() {
        assert_eq!(
            compile("a.b.c"),
            NodeResolver::composite(
                NodeResolver::composite(
                    NodeResolver::NameMatch("a".to_string()),
                    NodeResolver::NameMatch("b".to_string()),
                ),
                NodeResolver::NameMatch("c".to_string()),
            )
        );
    }

    #[test]
    fn test_compile_empty_expression() {
        let empty = Expression::parse("a").unwrap().poll_last();
        assert_eq!(NodeResolver::compile(&empty), NodeResolver::Identity);
    }

    #[test]
    fn test_resolve_index() {
        let root = person();
        let matched = compile("addresses[1]").resolve(&root).unwrap();
        assert_eq!(values(&matched), vec![Some("a1")]);
    }

    #[test]
    fn test_resolve_wildcard_keeps_order() {
        let root = person();
        let matched = compile("addresses[*]").resolve(&root).unwrap();
        assert_eq!(values(&matched), vec![Some("a0"), Some("a1"), Some("a2")]);
    }

    #[test]
    fn test_resolve_missing_is_empty() {
        let root = person();
        assert!(compile("missingField").resolve(&root).unwrap().is_empty());
        assert!(compile("addresses[9]").resolve(&root).unwrap().is_empty());
    }

    #[test]
    fn test_unnamed_children_pass_name_filter() {
        let root = PropertyNode::anonymous()
            .with_child(PropertyNode::element(0))
            .with_child(PropertyNode::leaf("other", "x"));
        let matched = compile("anything").resolve(&root).unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].position(), Some(0));
    }

    #[test]
    fn test_unpositioned_children_pass_index_filter() {
        let root = person();
        let matched = compile("$[2]").resolve(&root).unwrap();
        let names: Vec<Option<&str>> = matched.iter().map(|n| n.resolved_name()).collect();
        assert_eq!(names, vec![Some("name"), Some("addresses")]);
    }

    #[test]
    fn test_name_wildcard() {
        let root = person();
        assert_eq!(compile("*").resolve(&root).unwrap().len(), 2);
    }

    #[test]
    fn test_next_predicates() {
        let predicates = compile("$.items[*]").next_predicates();
        assert_eq!(
            predicates,
            vec![
                NextNodePredicate::PropertyName("items".to_string()),
                NextNodePredicate::ContainerElement(IndexSelector::Wildcard),
            ]
        );
    }

    #[test]
    fn test_display_round_trip() {
        for s in ["addresses[1]", "$[0].name", "a.b[*][2].c"] {
            assert_eq!(compile(s).to_string(), s);
        }
    }
}
