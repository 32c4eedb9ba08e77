//! Path expression parser.
//!
//! ```text
//! expression   := segment ('.' segment)*
//! segment      := name ('[' indexLiteral? ']')*
//! indexLiteral := '*' | nonNegativeInteger   (no leading zeros)
//! ```
//!
//! Empty brackets are accepted and dropped. Every other deviation from the
//! grammar is an error; nothing is silently ignored.

use super::ast::{Expression, Segment};
use super::error::ExpressionError;
use super::selector::{IndexSelector, WILDCARD_TOKEN};

/// Parser for a single raw segment (the text between two dots).
pub struct Parser<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Parses a full expression string.
    pub fn parse(expression: &str) -> Result<Expression, ExpressionError> {
        let segments = expression
            .split('.')
            .map(|raw| Parser::new(raw).parse_segment())
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|err| tracing::debug!(expression, %err, "failed to parse expression"))?;
        Ok(Expression::from_segments(segments))
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    /// Returns the next character and advances position.
    fn next(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    fn is_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    fn error(&self, reason: impl Into<String>) -> ExpressionError {
        ExpressionError::invalid(self.input, reason)
    }

    fn parse_segment(&mut self) -> Result<Segment, ExpressionError> {
        if self.input.is_empty() {
            return Err(self.error("empty segment"));
        }

        let name = self.parse_name()?;
        let mut indices = Vec::new();
        while !self.is_eof() {
            match self.next() {
                Some('[') => {
                    if let Some(index) = self.parse_bracket_body()? {
                        indices.push(index);
                    }
                }
                Some(ch) => {
                    return Err(self.error(format!(
                        "unexpected '{}' at position {} after ']'",
                        ch,
                        self.position - ch.len_utf8()
                    )))
                }
                None => break,
            }
        }
        Ok(Segment::new(name, indices))
    }

    /// Reads the segment name up to the first bracket.
    fn parse_name(&mut self) -> Result<String, ExpressionError> {
        let start = self.position;
        while let Some(ch) = self.peek() {
            match ch {
                '[' => break,
                ']' => return Err(self.error("']' without matching '['")),
                _ => {
                    self.next();
                }
            }
        }
        let name = &self.input[start..self.position];
        if name.is_empty() {
            return Err(self.error("missing name before '['"));
        }
        Ok(name.to_string())
    }

    /// Parses the text after `[` up to and including `]`.
    ///
    /// Returns `None` for empty brackets.
    fn parse_bracket_body(&mut self) -> Result<Option<IndexSelector>, ExpressionError> {
        let start = self.position;
        loop {
            match self.next() {
                Some(']') => break,
                Some('[') => return Err(self.error("nested '['")),
                Some(_) => {}
                None => return Err(self.error("'[' without matching ']'")),
            }
        }
        let body = &self.input[start..self.position - 1];
        if body.is_empty() {
            return Ok(None);
        }
        if body == WILDCARD_TOKEN {
            return Ok(Some(IndexSelector::Wildcard));
        }
        if !body.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(self.error(format!("invalid index '{}'", body)));
        }
        if body.len() > 1 && body.starts_with('0') {
            return Err(self.error(format!("leading zero in index '{}'", body)));
        }
        body.parse::<usize>()
            .map(|index| Some(IndexSelector::Position(index)))
            .map_err(|_| self.error(format!("index out of range '{}'", body)))
    }
}
