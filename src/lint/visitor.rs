//! Running a rule as a tree visitor.
//!
//! A rule implements [`Visitor`] for the declarations it checks and
//! [`RuleVisitor`] for what happens once the walk is over. [`run_visitor`]
//! drives one visitor over one tree.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::lint::{LintDiagnostic, RuleId, Severity, Span};
use crate::schema::{walk, Position, Proto, Visitor};

/// A visitor that collects diagnostics for a single rule application.
pub trait RuleVisitor: Visitor {
    /// Runs after the walk completes.
    fn finally(&mut self) -> Result<()> {
        Ok(())
    }

    /// Diagnostics collected during the walk, in emission order.
    fn into_diagnostics(self) -> Vec<LintDiagnostic>;
}

/// Walk `proto` with `visitor`, run its final step and return what it found.
///
/// An error from the final step discards the collected diagnostics.
pub fn run_visitor<V: RuleVisitor>(mut visitor: V, proto: &Proto) -> Result<Vec<LintDiagnostic>> {
    walk(proto, &mut visitor);
    visitor.finally()?;
    Ok(visitor.into_diagnostics())
}

/// Accumulates diagnostics for one rule against one file.
#[derive(Debug)]
pub struct FailureSink {
    rule_id: RuleId,
    severity: Severity,
    file: PathBuf,
    diagnostics: Vec<LintDiagnostic>,
}

impl FailureSink {
    /// Create a sink reporting under `rule_id` for `file`.
    pub fn new(rule_id: RuleId, severity: Severity, file: &Path) -> Self {
        Self {
            rule_id,
            severity,
            file: file.to_path_buf(),
            diagnostics: Vec::new(),
        }
    }

    /// Build a diagnostic at `position` without recording it.
    pub fn failure(&self, position: Position, message: impl Into<String>) -> LintDiagnostic {
        LintDiagnostic::new(
            self.rule_id.clone(),
            self.severity,
            Span::new(self.file.clone(), position),
            message,
        )
    }

    /// Record a diagnostic.
    pub fn push(&mut self, diagnostic: LintDiagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Recorded diagnostics, in emission order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut LintDiagnostic> {
        self.diagnostics.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn into_diagnostics(self) -> Vec<LintDiagnostic> {
        self.diagnostics
    }
}
