//! Ordered application of caller-supplied overrides.
//!
//! Overrides are `(Expression, constraint)` pairs. They are applied in
//! canonical order so that more specific expressions come after broader ones
//! and win. The constraint type is opaque here.

use crate::document::node::TreeNode;
use crate::expression::Expression;
use crate::resolver::{NodeResolver, ResolveError};

/// A set of overrides targeting nodes of one tree.
#[derive(Debug, Clone)]
pub struct OverrideSet<C> {
    entries: Vec<(Expression, C)>,
    strict: bool,
}

/// One override with the nodes it selected.
#[derive(Debug)]
pub struct ResolvedOverride<'s, 'n, C, N> {
    pub expression: &'s Expression,
    pub constraint: &'s C,
    pub nodes: Vec<&'n N>,
}

impl<C> Default for OverrideSet<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> OverrideSet<C> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            strict: false,
        }
    }

    /// When strict, an override that matches no node fails resolution.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn push(&mut self, expression: Expression, constraint: C) {
        self.entries.push((expression, constraint));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in canonical application order. Ties keep insertion order.
    pub fn ordered(&self) -> Vec<(&Expression, &C)> {
        let mut ordered: Vec<(&Expression, &C)> =
            self.entries.iter().map(|(e, c)| (e, c)).collect();
        ordered.sort_by(|(a, _), (b, _)| a.canonical_cmp(b));
        ordered
    }

    /// Compiles and runs every override against `root`, in canonical order.
    pub fn resolve<'s, 'n, N: TreeNode>(
        &'s self,
        root: &'n N,
    ) -> Result<Vec<ResolvedOverride<'s, 'n, C, N>>, ResolveError> {
        self.ordered()
            .into_iter()
            .map(|(expression, constraint)| {
                let mut resolver = NodeResolver::compile(expression);
                if self.strict {
                    resolver = resolver.strict();
                }
                let nodes = resolver.resolve(root)?;
                Ok(ResolvedOverride {
                    expression,
                    constraint,
                    nodes,
                })
            })
            .collect()
    }
}

impl<C> FromIterator<(Expression, C)> for OverrideSet<C> {
    fn from_iter<I: IntoIterator<Item = (Expression, C)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
            strict: false,
        }
    }
}
