//! Error types for path expression parsing.

use thiserror::Error;

/// Errors raised while parsing a path expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpressionError {
    /// A raw segment could not be parsed.
    #[error("expression is invalid. segment '{segment}': {reason}")]
    InvalidExpression { segment: String, reason: String },
}

impl ExpressionError {
    pub(crate) fn invalid(segment: &str, reason: impl Into<String>) -> Self {
        ExpressionError::InvalidExpression {
            segment: segment.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns the raw segment that failed to parse.
    pub fn segment(&self) -> &str {
        match self {
            ExpressionError::InvalidExpression { segment, .. } => segment,
        }
    }
}
