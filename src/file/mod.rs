//! File I/O for node trees.
//!
//! This module loads YAML or JSON documents, optionally gzip-compressed, from
//! disk or stdin and turns them into `PropertyNode` trees.

pub mod loader;
