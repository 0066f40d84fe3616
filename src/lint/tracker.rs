//! Per-line record of naming violations.
//!
//! The tracker is filled while a rule walks the tree and read afterwards by
//! the [`FixEngine`](crate::lint::FixEngine) to find the lines it must
//! rewrite. One tracker lives for exactly one rule application.

use std::collections::HashMap;

use crate::schema::Position;

/// One violating identifier found in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentOccurrence {
    /// The identifier as declared.
    pub name: String,
    /// Where the declaration starts.
    pub position: Position,
}

impl IdentOccurrence {
    /// Create a new occurrence.
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// Maps a 1-indexed line number to the violations recorded on it, in
/// recording order. A line is present only if something was recorded on it.
#[derive(Debug, Default)]
pub struct ViolationTracker {
    by_line: HashMap<usize, Vec<IdentOccurrence>>,
}

impl ViolationTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an occurrence to `line`. Duplicates are kept.
    pub fn record(&mut self, line: usize, occurrence: IdentOccurrence) {
        self.by_line.entry(line).or_default().push(occurrence);
    }

    /// Occurrences recorded on `line`, if any.
    pub fn get(&self, line: usize) -> Option<&[IdentOccurrence]> {
        self.by_line.get(&line).map(Vec::as_slice)
    }

    /// Every line with occurrences, in ascending line order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[IdentOccurrence])> {
        let mut lines: Vec<_> = self
            .by_line
            .iter()
            .map(|(line, occurrences)| (*line, occurrences.as_slice()))
            .collect();
        lines.sort_by_key(|(line, _)| *line);
        lines.into_iter()
    }

    /// Number of distinct lines with at least one occurrence.
    pub fn line_count(&self) -> usize {
        self.by_line.len()
    }

    /// Total number of recorded occurrences.
    pub fn len(&self) -> usize {
        self.by_line.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_line.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterates_lines_in_order() {
        let mut tracker = ViolationTracker::new();
        tracker.record(9, IdentOccurrence::new("c", Position::new(9, 1)));
        tracker.record(2, IdentOccurrence::new("a", Position::new(2, 1)));
        tracker.record(2, IdentOccurrence::new("b", Position::new(2, 8)));

        let lines: Vec<usize> = tracker.iter().map(|(line, _)| line).collect();
        assert_eq!(lines, vec![2, 9]);
        assert_eq!(tracker.iter().next().unwrap().1.len(), 2);
    }

    #[test]
    fn new_tracker_is_empty() {
        let tracker = ViolationTracker::new();
        assert!(tracker.is_empty());
        assert_eq!(tracker.len(), 0);
        assert!(tracker.get(1).is_none());
    }

    #[test]
    fn record_creates_line_entry() {
        let mut tracker = ViolationTracker::new();
        tracker.record(4, IdentOccurrence::new("userId", Position::new(4, 3)));

        assert_eq!(tracker.line_count(), 1);
        assert_eq!(tracker.get(4).unwrap()[0].name, "userId");
        assert!(tracker.get(5).is_none());
    }

    #[test]
    fn keeps_insertion_order_per_line() {
        let mut tracker = ViolationTracker::new();
        tracker.record(2, IdentOccurrence::new("fooBar", Position::new(2, 3)));
        tracker.record(2, IdentOccurrence::new("bazQux", Position::new(2, 22)));

        let names: Vec<_> = tracker.get(2).unwrap().iter().map(|o| &o.name).collect();
        assert_eq!(names, vec!["fooBar", "bazQux"]);
    }

    #[test]
    fn does_not_deduplicate() {
        let mut tracker = ViolationTracker::new();
        let occurrence = IdentOccurrence::new("userId", Position::new(4, 3));
        tracker.record(4, occurrence.clone());
        tracker.record(4, occurrence);

        assert_eq!(tracker.len(), 2);
        assert_eq!(tracker.line_count(), 1);
    }
}
