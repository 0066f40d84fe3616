//! Lint rule definitions.
//!
//! This module provides the core traits and types for defining lint rules:
//!
//! - [`LintRule`] - The trait that all lint rules must implement
//! - [`RuleId`] - Unique identifier for a lint rule
//! - [`Severity`] - Severity level for diagnostics (Hint, Warning, Error)

use std::path::Path;

use super::diagnostic::LintDiagnostic;
use crate::error::Result;
use crate::schema::Proto;

/// Unique identifier for a lint rule.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity level for lint diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational hint, does not affect validity.
    Hint,
    /// Warning that should be addressed.
    Warning,
    /// Error that fails the lint run.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Hint => write!(f, "hint"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A lint rule that checks a parsed schema.
///
/// Each rule checks for a specific issue and produces one diagnostic per
/// violation. Rules that support fixing rewrite the schema source as part
/// of [`apply`](LintRule::apply) when constructed in fix mode.
pub trait LintRule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Description of what this rule checks.
    fn purpose(&self) -> &str;

    /// Whether the rule comes from the official protocol buffer style guide.
    fn is_official(&self) -> bool {
        false
    }

    /// Default severity for this rule.
    fn default_severity(&self) -> Severity;

    /// Check `proto`, whose source lives at `source`, and return any
    /// diagnostics.
    ///
    /// # Errors
    ///
    /// Only I/O failures are errors; style violations are diagnostics.
    fn apply(&self, proto: &Proto, source: &Path) -> Result<Vec<LintDiagnostic>>;

    /// Whether this rule supports auto-fix.
    fn supports_fix(&self) -> bool {
        false
    }
}
