//! Concrete node trees and their construction from documents.

pub mod node;
pub mod parser;

pub use node::{PropertyNode, TreeNode};
