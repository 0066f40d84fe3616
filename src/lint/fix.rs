//! Automatic fix application.
//!
//! The [`FixEngine`] maps violations recorded in a [`ViolationTracker`] back
//! onto the raw source text and renames the offending identifiers in place.
//! Everything else on a rewritten line, spacing included, is kept as is.

use std::path::Path;

use crate::error::Result;
use crate::lint::case::to_lower_snake;
use crate::lint::source::{read_all_lines, write_lines};
use crate::lint::tracker::{IdentOccurrence, ViolationTracker};

/// Result of rewriting one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRewrite {
    /// The rewritten line.
    pub text: String,
    /// Number of identifiers renamed.
    pub renamed: usize,
    /// Occurrences whose name could not be found on the line.
    pub unresolved: Vec<IdentOccurrence>,
}

/// Result of applying fixes to a file.
#[derive(Debug, Default)]
pub struct FixResult {
    /// Number of identifiers renamed.
    pub renamed: usize,
    /// Number of lines that changed.
    pub lines_changed: usize,
    /// Occurrences that could not be mapped onto the source text.
    pub unresolved: Vec<IdentOccurrence>,
}

/// Engine for applying automatic fixes.
pub struct FixEngine;

impl FixEngine {
    /// Create a new fix engine.
    pub fn new() -> Self {
        Self
    }

    /// Rewrite the file at `path` so every tracked identifier becomes
    /// lower_snake_case.
    ///
    /// Nothing is read or written when the tracker is empty, and the file is
    /// left untouched when no line changes.
    pub fn fix_file(&self, path: &Path, tracker: &ViolationTracker) -> Result<FixResult> {
        if tracker.is_empty() {
            return Ok(FixResult::default());
        }

        let mut source = read_all_lines(path)?;
        let result = self.fix_lines(&mut source.lines, tracker);

        if result.lines_changed > 0 {
            write_lines(path, &source)?;
            tracing::info!(
                "Renamed {} field(s) on {} line(s) in {}",
                result.renamed,
                result.lines_changed,
                path.display()
            );
        }

        Ok(result)
    }

    /// Rewrite every tracked line of `lines` in place. Line `n` of the
    /// tracker is `lines[n - 1]`; untracked lines are not touched.
    pub fn fix_lines(&self, lines: &mut [String], tracker: &ViolationTracker) -> FixResult {
        let mut result = FixResult::default();

        for (index, line) in lines.iter_mut().enumerate() {
            let Some(occurrences) = tracker.get(index + 1) else {
                continue;
            };

            let rewrite = self.rewrite_line(line, occurrences);
            if rewrite.text != *line {
                result.lines_changed += 1;
                *line = rewrite.text;
            }
            result.renamed += rewrite.renamed;
            result.unresolved.extend(rewrite.unresolved);
        }

        for (line, occurrences) in tracker.iter().filter(|(line, _)| *line > lines.len()) {
            tracing::warn!(
                "Line {} is past the end of the source; {} field name(s) left unchanged",
                line,
                occurrences.len()
            );
            result.unresolved.extend(occurrences.iter().cloned());
        }

        result
    }

    /// Rename every occurrence on a single line.
    ///
    /// Occurrences are applied right to left (descending column), so a
    /// rename never shifts the byte offset of one still pending.
    pub fn rewrite_line(&self, line: &str, occurrences: &[IdentOccurrence]) -> LineRewrite {
        let mut ordered: Vec<&IdentOccurrence> = occurrences.iter().collect();
        ordered.sort_by(|a, b| b.position.column.cmp(&a.position.column));

        let mut text = line.to_string();
        let mut renamed = 0;
        let mut unresolved = Vec::new();

        for occurrence in ordered {
            let from = byte_offset(&text, occurrence.position.column);
            let found = locate_name(&text, &occurrence.name, from)
                .or_else(|| locate_name(&text, &occurrence.name, 0));

            match found {
                Some(start) => {
                    let replacement = to_lower_snake(&occurrence.name);
                    tracing::debug!("replace {} with {}", occurrence.name, replacement);
                    text.replace_range(start..start + occurrence.name.len(), &replacement);
                    renamed += 1;
                }
                None => {
                    tracing::warn!(
                        "Field name {:?} not found on line {}; leaving it unchanged",
                        occurrence.name,
                        occurrence.position.line
                    );
                    unresolved.push(occurrence.clone());
                }
            }
        }

        LineRewrite {
            text,
            renamed,
            unresolved,
        }
    }
}

impl Default for FixEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte offset of the 1-indexed character `column`, clamped to the line end.
fn byte_offset(text: &str, column: usize) -> usize {
    text.char_indices()
        .nth(column.saturating_sub(1))
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

/// Find `name` as a whole word at or after byte `from`.
///
/// A match directly followed by `=` sits in the name slot of a declaration
/// and wins over earlier matches (a type can share the field's spelling).
fn locate_name(text: &str, name: &str, from: usize) -> Option<usize> {
    if name.is_empty() {
        return None;
    }

    let mut first = None;
    for (offset, _) in text[from..].match_indices(name) {
        let start = from + offset;
        let end = start + name.len();
        if !is_whole_word(text, start, end) {
            continue;
        }
        if text[end..].trim_start().starts_with('=') {
            return Some(start);
        }
        first.get_or_insert(start);
    }
    first
}

fn is_whole_word(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_ident_char) && !after.is_some_and(is_ident_char)
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
