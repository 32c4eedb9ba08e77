//! Integration tests for resolving expressions against node trees.

use fixturepath::document::node::{PropertyNode, TreeNode};
use fixturepath::expression::{Expression, IndexSelector};
use fixturepath::resolver::{NodeResolver, ResolveError};
use fixturepath::{resolve, Error, OverrideSet};

/// person { name, addresses [0, 1, 2] }
fn person() -> PropertyNode {
    PropertyNode::object("person")
        .with_child(PropertyNode::leaf("name", "Alice"))
        .with_child(
            PropertyNode::object("addresses")
                .with_child(PropertyNode::element(0).with_value("home"))
                .with_child(PropertyNode::element(1).with_value("work"))
                .with_child(PropertyNode::element(2).with_value("cabin")),
        )
}

fn compile(s: &str) -> NodeResolver {
    NodeResolver::compile(&Expression::parse(s).unwrap())
}

fn values<'a>(nodes: &[&'a PropertyNode]) -> Vec<&'a str> {
    nodes.iter().filter_map(|n| n.value()).collect()
}

#[test]
fn test_scenario_a_single_element() {
    let resolver = compile("addresses[1]");
    assert_eq!(
        resolver,
        NodeResolver::Composite(
            Box::new(NodeResolver::NameMatch("addresses".to_string())),
            Box::new(NodeResolver::IndexMatch(IndexSelector::Position(1))),
        )
    );

    let root = person();
    let matched = resolver.resolve(&root).unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].position(), Some(1));
    assert_eq!(matched[0].value(), Some("work"));
}

#[test]
fn test_scenario_b_wildcard() {
    let root = person();
    let matched = compile("addresses[*]").resolve(&root).unwrap();
    let positions: Vec<Option<usize>> = matched.iter().map(|n| n.position()).collect();
    assert_eq!(positions, vec![Some(0), Some(1), Some(2)]);
}

#[test]
fn test_scenario_c_strict_versus_plain() {
    let root = person();
    assert!(compile("missingField").resolve(&root).unwrap().is_empty());

    let err = compile("missingField").strict().resolve(&root).unwrap_err();
    assert!(matches!(err, ResolveError::NoMatch { ref expression } if expression == "missingField"));
}

#[test]
fn test_strict_law() {
    let root = person();
    for text in ["name", "addresses", "addresses[0]", "addresses[*]", "$"] {
        let plain = compile(text).resolve(&root).unwrap();
        let strict = compile(text).strict().resolve(&root).unwrap();
        assert!(!strict.is_empty());
        assert_eq!(plain, strict);
    }
}

#[test]
fn test_compile_is_deterministic() {
    let root = person();
    let expression = Expression::parse("addresses[*]").unwrap();
    let first = NodeResolver::compile(&expression).resolve(&root).unwrap();
    let second = NodeResolver::compile(&expression).resolve(&root).unwrap();
    assert_eq!(first, second);
}

/// Composite results keep outer order, then inner order.
#[test]
fn test_composite_preserves_order() {
    let root = PropertyNode::anonymous().with_child(
        PropertyNode::object("rows")
            .with_child(
                PropertyNode::element(0)
                    .with_child(PropertyNode::element(0).with_value("r0c0"))
                    .with_child(PropertyNode::element(1).with_value("r0c1")),
            )
            .with_child(
                PropertyNode::element(1)
                    .with_child(PropertyNode::element(0).with_value("r1c0"))
                    .with_child(PropertyNode::element(1).with_value("r1c1")),
            ),
    );

    let all = compile("rows[*][*]").resolve(&root).unwrap();
    assert_eq!(values(&all), vec!["r0c0", "r0c1", "r1c0", "r1c1"]);

    let column = compile("rows[*][1]").resolve(&root).unwrap();
    assert_eq!(values(&column), vec!["r0c1", "r1c1"]);
}

#[test]
fn test_nested_fields() {
    let root = PropertyNode::anonymous().with_child(
        PropertyNode::object("orders")
            .with_child(
                PropertyNode::element(0).with_child(PropertyNode::leaf("id", "A-1")),
            )
            .with_child(
                PropertyNode::element(1).with_child(PropertyNode::leaf("id", "B-2")),
            ),
    );
    let ids = compile("orders[*].id").resolve(&root).unwrap();
    assert_eq!(values(&ids), vec!["A-1", "B-2"]);
}

#[test]
fn test_map_entries_are_positioned_and_named() {
    let root = PropertyNode::anonymous().with_child(
        PropertyNode::object("scores")
            .with_child(PropertyNode::element(0).with_name("alice").with_value("10"))
            .with_child(PropertyNode::element(1).with_name("bob").with_value("20")),
    );
    let second = compile("scores[1]").resolve(&root).unwrap();
    assert_eq!(values(&second), vec!["20"]);
    let bob = compile("scores.bob").resolve(&root).unwrap();
    assert_eq!(values(&bob), vec!["20"]);
}

#[test]
fn test_custom_tree_node() {
    struct Field {
        name: &'static str,
        children: Vec<Field>,
    }

    impl TreeNode for Field {
        fn resolved_name(&self) -> Option<&str> {
            Some(self.name)
        }

        fn position(&self) -> Option<usize> {
            None
        }

        fn children(&self) -> &[Self] {
            &self.children
        }
    }

    let root = Field {
        name: "root",
        children: vec![Field {
            name: "inner",
            children: vec![Field {
                name: "leaf",
                children: vec![],
            }],
        }],
    };
    let matched = compile("inner.leaf").resolve(&root).unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].name, "leaf");
}

#[test]
fn test_resolve_helper_reports_both_error_kinds() {
    let root = person();
    assert!(matches!(resolve(&root, "addresses[", false), Err(Error::Expression(_))));
    assert!(matches!(resolve(&root, "nope", true), Err(Error::Resolve(_))));
    assert_eq!(resolve(&root, "addresses[2]", true).unwrap().len(), 1);
}

#[test]
fn test_override_set_canonical_application() {
    let root = person();
    let overrides: OverrideSet<&str> = [
        (Expression::parse("addresses[0]").unwrap(), "first"),
        (Expression::parse("addresses[*]").unwrap(), "all"),
        (Expression::parse("name").unwrap(), "name"),
    ]
    .into_iter()
    .collect();

    let resolved = overrides.resolve(&root).unwrap();
    let order: Vec<&str> = resolved.iter().map(|r| *r.constraint).collect();
    assert_eq!(order, vec!["name", "first", "all"]);
    assert_eq!(resolved[2].nodes.len(), 3);
}
