//! Lint diagnostic messages.
//!
//! This module provides the [`LintDiagnostic`] type for representing
//! style violations found in a schema, each tied to the source location
//! of the offending declaration.

use super::rule::{RuleId, Severity};
use super::span::Span;
use crate::schema::Position;

/// A diagnostic message produced by a lint rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintDiagnostic {
    /// The rule that produced this diagnostic.
    pub rule_id: RuleId,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Where the violation was found.
    pub span: Span,
    /// Optional suggestion for fixing the issue.
    pub suggestion: Option<String>,
    /// Set once the violation has been rewritten in the source.
    pub fixed: bool,
}

impl LintDiagnostic {
    /// Create a new diagnostic.
    pub fn new(rule_id: RuleId, severity: Severity, span: Span, message: impl Into<String>) -> Self {
        Self {
            rule_id,
            severity,
            message: message.into(),
            span,
            suggestion: None,
            fixed: false,
        }
    }

    /// Add a fix suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Mark the violation as rewritten in the source.
    pub fn mark_fixed(&mut self) {
        self.fixed = true;
    }

    /// Position of the reported declaration.
    pub fn position(&self) -> Position {
        self.span.position
    }
}
