//! Source location spans.
//!
//! This module provides types for tracking source locations
//! in schema files, enabling precise error reporting.

use std::path::PathBuf;

use crate::schema::Position;

/// A source location: a file and a 1-indexed position within it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// File path.
    pub file: PathBuf,
    /// Line and column of the reported declaration.
    pub position: Position,
}

impl Span {
    /// Create a span at a position.
    pub fn new(file: impl Into<PathBuf>, position: Position) -> Self {
        Self {
            file: file.into(),
            position,
        }
    }

    /// Line number (1-indexed).
    pub fn line(&self) -> usize {
        self.position.line
    }

    /// Column number (1-indexed).
    pub fn column(&self) -> usize {
        self.position.column
    }
}
