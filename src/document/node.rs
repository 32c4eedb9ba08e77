//! Node trees that expressions are resolved against.
//!
//! The resolver only needs three things from a node: its resolved property
//! name, its element position, and its ordered children. Any tree can be
//! addressed by implementing [`TreeNode`]; [`PropertyNode`] is an owned tree
//! used by the file loader and the tests.
//!
//! # Example
//!
//! ```
//! use fixturepath::document::node::{PropertyNode, TreeNode};
//!
//! let person = PropertyNode::object("person")
//!     .with_child(PropertyNode::leaf("name", "Alice"))
//!     .with_child(
//!         PropertyNode::object("addresses")
//!             .with_child(PropertyNode::element(0))
//!             .with_child(PropertyNode::element(1)),
//!     );
//! assert_eq!(person.children().len(), 2);
//! assert_eq!(person.children()[1].children()[1].position(), Some(1));
//! ```

use std::fmt;

/// The capabilities the resolver needs from a node.
pub trait TreeNode {
    /// The property name this node was generated for, if any.
    ///
    /// Container elements and map values usually have no name.
    fn resolved_name(&self) -> Option<&str>;

    /// The position of this node inside its parent container, if any.
    fn position(&self) -> Option<usize>;

    /// Child nodes in tree order.
    fn children(&self) -> &[Self]
    where
        Self: Sized;
}

/// An owned node with an optional scalar value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropertyNode {
    name: Option<String>,
    position: Option<usize>,
    value: Option<String>,
    children: Vec<PropertyNode>,
}

impl PropertyNode {
    /// A named node without a value.
    pub fn object(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// A named node holding a scalar value.
    pub fn leaf(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// An unnamed container element at `position`.
    pub fn element(position: usize) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    /// An unnamed, unpositioned node; used for document roots.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_child(mut self, child: PropertyNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn push_child(&mut self, child: PropertyNode) {
        self.children.push(child);
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl TreeNode for PropertyNode {
    fn resolved_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn position(&self) -> Option<usize> {
        self.position
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}

impl fmt::Display for PropertyNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.name, self.position) {
            (Some(name), Some(position)) => write!(f, "{}[{}]", name, position)?,
            (Some(name), None) => f.write_str(name)?,
            (None, Some(position)) => write!(f, "[{}]", position)?,
            (None, None) => f.write_str("$")?,
        }
        match &self.value {
            Some(value) => write!(f, " = {}", value),
            None => write!(f, " ({} children)", self.children.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let node = PropertyNode::element(3).with_name("entry").with_value("x");
        assert_eq!(node.resolved_name(), Some("entry"));
        assert_eq!(node.position(), Some(3));
        assert_eq!(node.value(), Some("x"));
    }

    #[test]
    fn test_display() {
        assert_eq!(PropertyNode::leaf("name", "Alice").to_string(), "name = Alice");
        assert_eq!(PropertyNode::element(2).to_string(), "[2] (0 children)");
        assert_eq!(PropertyNode::anonymous().to_string(), "$ (0 children)");
    }
}
