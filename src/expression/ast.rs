//! Structured form of a path expression.

use std::cmp::Ordering;
use std::fmt;

use super::error::ExpressionError;
use super::parser::Parser;
use super::selector::{name_matches, IndexSelector, SELF_TOKEN};

/// One dot-separated step of an expression: a name plus bracketed indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    name: String,
    indices: Vec<IndexSelector>,
}

impl Segment {
    pub fn new(name: impl Into<String>, indices: Vec<IndexSelector>) -> Self {
        Self {
            name: name.into(),
            indices,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn indices(&self) -> &[IndexSelector] {
        &self.indices
    }

    /// True for the reserved `$` segment.
    pub fn is_self(&self) -> bool {
        self.name == SELF_TOKEN
    }

    /// Wildcard-aware match on both name and index sequence.
    pub fn matches(&self, other: &Segment) -> bool {
        name_matches(&self.name, &other.name)
            && self.indices.len() == other.indices.len()
            && self
                .indices
                .iter()
                .zip(&other.indices)
                .all(|(a, b)| a.matches(b))
    }

    /// Ordering used to sort overrides.
    ///
    /// When the names are equal the indices are compared pairwise in
    /// descending order, so `x[1]` sorts before `x[0]`. Otherwise, or when
    /// every shared index ties, the shorter index sequence sorts first.
    /// Segments with different names and equally long index sequences tie.
    pub fn canonical_cmp(&self, other: &Segment) -> Ordering {
        if self.name == other.name {
            for (mine, theirs) in self.indices.iter().zip(&other.indices) {
                match theirs.cmp(mine) {
                    Ordering::Equal => continue,
                    unequal => return unequal,
                }
            }
        }
        self.indices.len().cmp(&other.indices.len())
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for index in &self.indices {
            write!(f, "[{}]", index)?;
        }
        Ok(())
    }
}

/// An immutable, parsed path expression such as `order.items[*].price`.
///
/// The string form is the source of truth: `add_first` and `add_last` work by
/// textual concatenation followed by a re-parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Expression {
    segments: Vec<Segment>,
}

impl Expression {
    pub(crate) fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Parses an expression from its textual form.
    pub fn parse(expression: &str) -> Result<Self, ExpressionError> {
        Parser::parse(expression)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns `prefix.self`, re-parsed. On the empty expression this is
    /// just `prefix`.
    pub fn add_first(&self, prefix: &str) -> Result<Self, ExpressionError> {
        if self.is_empty() {
            return Parser::parse(prefix);
        }
        Parser::parse(&format!("{}.{}", prefix, self))
    }

    /// Returns `self.suffix`, re-parsed. On the empty expression this is
    /// just `suffix`.
    pub fn add_last(&self, suffix: &str) -> Result<Self, ExpressionError> {
        if self.is_empty() {
            return Parser::parse(suffix);
        }
        Parser::parse(&format!("{}.{}", self, suffix))
    }

    /// Steps back one level: drops the deepest index of the last segment, or
    /// the whole last segment when it has no indices.
    ///
    /// `items[0][1]` becomes `items[0]`, `order.items` becomes `order`.
    pub fn poll_last(&self) -> Self {
        let mut segments = self.segments.clone();
        let Some(mut last) = segments.pop() else {
            return self.clone();
        };
        if last.indices.pop().is_some() {
            segments.push(last);
        }
        Self { segments }
    }

    /// Wildcard-aware match: same length and every segment pair matches.
    pub fn matches(&self, other: &Expression) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|(a, b)| a.matches(b))
    }

    /// Ordering used to sort overrides: fewer segments first, then
    /// segment-by-segment with [`Segment::canonical_cmp`].
    ///
    /// This is deliberately not an `Ord` impl because distinct expressions
    /// can compare equal (for example `a` and `b`).
    pub fn canonical_cmp(&self, other: &Expression) -> Ordering {
        self.segments
            .len()
            .cmp(&other.segments.len())
            .then_with(|| {
                self.segments
                    .iter()
                    .zip(&other.segments)
                    .map(|(a, b)| a.canonical_cmp(b))
                    .find(|ordering| ordering.is_ne())
                    .unwrap_or(Ordering::Equal)
            })
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Expression {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::parse(s)
    }
}

/// Stable sort into canonical application order.
pub fn sort_canonical(expressions: &mut [Expression]) {
    expressions.sort_by(|a, b| a.canonical_cmp(b));
}
