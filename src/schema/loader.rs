//! Tree document loading.
//!
//! The upstream parser hands its tree over as a serialized document. JSON is
//! the default; paths ending in `.yml` or `.yaml` are read as YAML.

use crate::error::{ProtostyleError, Result};
use crate::schema::tree::Proto;
use std::fs;
use std::path::Path;

/// Serialization format of a tree document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeFormat {
    Json,
    Yaml,
}

impl TreeFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yml") | Some("yaml") => TreeFormat::Yaml,
            _ => TreeFormat::Json,
        }
    }
}

/// Load a tree document from disk.
///
/// # Errors
///
/// Returns `TreeNotFound` if the file doesn't exist.
/// Returns `TreeParseError` if the document doesn't describe a tree.
pub fn load_tree(path: &Path) -> Result<Proto> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ProtostyleError::TreeNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ProtostyleError::Io(e)
        }
    })?;

    parse_tree(&content, TreeFormat::from_path(path), path)
}

/// Parse a tree document.
///
/// # Arguments
///
/// * `content` - The serialized tree
/// * `format` - How `content` is encoded
/// * `source_path` - Path for error reporting
pub fn parse_tree(content: &str, format: TreeFormat, source_path: &Path) -> Result<Proto> {
    let parsed = match format {
        TreeFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        TreeFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
    };

    parsed.map_err(|message| ProtostyleError::TreeParseError {
        path: source_path.to_path_buf(),
        message,
    })
}
