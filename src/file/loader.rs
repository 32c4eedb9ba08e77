//! Tree file loading functionality.
//!
//! This module provides functions to load YAML (or JSON) documents from files
//! or stdin, parsing them into `PropertyNode` trees that expressions can be
//! resolved against.

use crate::document::node::PropertyNode;
use crate::document::parser::parse_yaml;
use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::fs;
use std::io::Read;
use std::path::Path;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Loads and parses a tree file from the filesystem.
///
/// Files ending in `.gz` are decompressed first.
///
/// # Examples
///
/// ```no_run
/// use fixturepath::file::loader::load_tree_file;
///
/// let root = load_tree_file("order.yaml").unwrap();
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file path does not exist or cannot be read
/// - A `.gz` file is not valid gzip
/// - The contents are not valid YAML
pub fn load_tree_file<P: AsRef<Path>>(path: P) -> Result<PropertyNode> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        let file = fs::File::open(path_ref)
            .with_context(|| format!("Failed to open file {}", path_ref.display()))?;
        decode_gzip(file)
            .with_context(|| format!("Failed to decompress {}", path_ref.display()))?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read file {}", path_ref.display()))?
    };

    tracing::debug!(path = %path_ref.display(), gzipped = is_gzipped, "loaded tree file");
    parse_yaml(&content)
}

/// Loads and parses a tree from standard input.
///
/// Gzip input is detected by its magic bytes.
pub fn load_tree_from_stdin() -> Result<PropertyNode> {
    let mut bytes = Vec::new();
    std::io::stdin()
        .read_to_end(&mut bytes)
        .context("Failed to read from stdin")?;

    let content = if bytes.starts_with(&GZIP_MAGIC) {
        decode_gzip(bytes.as_slice()).context("Failed to decompress stdin")?
    } else {
        String::from_utf8(bytes).context("Input is not valid UTF-8")?
    };
    parse_yaml(&content)
}

/// Decompresses a whole gzip stream into UTF-8 text.
fn decode_gzip<R: Read>(reader: R) -> Result<String> {
    let mut content = String::new();
    GzDecoder::new(reader)
        .read_to_string(&mut content)
        .context("Input is not valid gzipped UTF-8")?;
    Ok(content)
}
