//! Path expressions addressing nodes of a generated object tree.
//!
//! # Supported Syntax
//!
//! - `name` - Child property by resolved name
//! - `a.b.c` - Nested properties
//! - `items[2]` - Element at position 2 of a container or map
//! - `items[*]` - Every element
//! - `grid[0][1]` - Nested containers
//! - `*` - Any property name
//! - `$` - The current node itself
//!
//! # Examples
//!
//! ```
//! use fixturepath::expression::Expression;
//!
//! let expression = Expression::parse("order.items[*].price").unwrap();
//! assert_eq!(expression.len(), 3);
//! assert_eq!(expression.poll_last().to_string(), "order.items[*]");
//! ```

pub mod ast;
pub mod error;
pub mod parser;
pub mod selector;

pub use ast::{sort_canonical, Expression, Segment};
pub use error::ExpressionError;
pub use parser::Parser;
pub use selector::{name_matches, IndexSelector, SELF_TOKEN, WILDCARD_TOKEN};
