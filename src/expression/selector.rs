//! Name and index selectors with wildcard-aware matching.
//!
//! Wildcard matching is not an equivalence relation (`[*]` matches both `[0]`
//! and `[1]`, which do not match each other), so it is exposed through the
//! explicit `matches` predicates below. The derived `PartialEq`, `Eq`, `Hash`
//! and `Ord` impls stay purely structural and are safe to use in maps and sets.

use std::fmt;

/// Token that selects every position, or every name.
pub const WILDCARD_TOKEN: &str = "*";

/// Reserved segment name meaning "the current node".
pub const SELF_TOKEN: &str = "$";

/// A position selector inside brackets.
///
/// `Wildcard` orders before every concrete position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IndexSelector {
    /// `[*]`
    Wildcard,
    /// `[n]`
    Position(usize),
}

impl IndexSelector {
    /// Wildcard-aware match: a wildcard on either side matches anything.
    pub fn matches(&self, other: &IndexSelector) -> bool {
        match (self, other) {
            (IndexSelector::Wildcard, _) | (_, IndexSelector::Wildcard) => true,
            (IndexSelector::Position(a), IndexSelector::Position(b)) => a == b,
        }
    }

    /// Matches a concrete element position.
    pub fn matches_position(&self, position: usize) -> bool {
        self.matches(&IndexSelector::Position(position))
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, IndexSelector::Wildcard)
    }
}

impl fmt::Display for IndexSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexSelector::Wildcard => f.write_str(WILDCARD_TOKEN),
            IndexSelector::Position(position) => write!(f, "{}", position),
        }
    }
}

/// Wildcard-aware name match: `*` on either side matches any name.
pub fn name_matches(selector: &str, name: &str) -> bool {
    selector == name || selector == WILDCARD_TOKEN || name == WILDCARD_TOKEN
}
