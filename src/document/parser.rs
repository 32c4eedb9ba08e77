//! Builds `PropertyNode` trees from YAML (and therefore JSON) text.
//!
//! Mapping keys become resolved names. Sequence items become unnamed
//! children positioned by their index. Scalars keep their textual value.
//!
//! # Example
//!
//! ```
//! use fixturepath::document::parser::parse_yaml;
//! use fixturepath::document::node::TreeNode;
//!
//! let root = parse_yaml("name: Alice\ntags: [a, b]").unwrap();
//! assert_eq!(root.children()[1].children().len(), 2);
//! ```

use super::node::PropertyNode;
use anyhow::{Context, Result};
use serde_yaml::Value;

/// Parses YAML text into a tree rooted at an anonymous node.
pub fn parse_yaml(content: &str) -> Result<PropertyNode> {
    let value: Value = serde_yaml::from_str(content).context("Failed to parse YAML")?;
    let mut root = PropertyNode::anonymous();
    attach_children(&mut root, &value);
    Ok(root)
}

/// Converts a single YAML value into a node with no name or position.
pub fn parse_value(value: &Value) -> PropertyNode {
    let mut node = PropertyNode::anonymous();
    attach_children(&mut node, value);
    node
}

fn attach_children(node: &mut PropertyNode, value: &Value) {
    match value {
        Value::Mapping(map) => {
            for (key, child) in map {
                let child_node = parse_value(child).with_name(scalar_text(key));
                node.push_child(child_node);
            }
        }
        Value::Sequence(items) => {
            for (position, item) in items.iter().enumerate() {
                node.push_child(parse_value(item).with_position(position));
            }
        }
        Value::Tagged(tagged) => attach_children(node, &tagged.value),
        scalar => *node = std::mem::take(node).with_value(scalar_text(scalar)),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
