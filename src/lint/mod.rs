//! Schema style checks and autofix.
//!
//! This module checks parsed schema trees through a pluggable rule-based
//! system and can rename offending identifiers in the schema source.
//!
//! # Overview
//!
//! The lint system consists of:
//!
//! - **Rules** - Individual style checks ([`LintRule`] trait)
//! - **Registry** - Collection of all available rules ([`RuleRegistry`])
//! - **Diagnostics** - Violations with source position ([`LintDiagnostic`])
//! - **Fixes** - Source rewriting guided by a [`ViolationTracker`] ([`FixEngine`])
//!
//! # Example
//!
//! ```
//! use protostyle::lint::{is_lower_snake_case, to_lower_snake, RuleId, RuleRegistry};
//!
//! assert!(!is_lower_snake_case("userId"));
//! assert_eq!(to_lower_snake("userId"), "user_id");
//!
//! let registry = RuleRegistry::with_builtins(false);
//! assert!(registry.get(&RuleId::new("FIELD_NAMES_LOWER_SNAKE_CASE")).is_some());
//! ```

pub mod case;
pub mod diagnostic;
pub mod fix;
pub mod output;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod source;
pub mod span;
pub mod tracker;
pub mod visitor;

pub use case::{is_lower_snake_case, to_lower_snake};
pub use diagnostic::LintDiagnostic;
pub use fix::{FixEngine, FixResult, LineRewrite};
pub use output::{HumanFormatter, JsonFormatter, LintFormatter, OutputFormat};
pub use registry::RuleRegistry;
pub use rule::{LintRule, RuleId, Severity};
pub use rules::FieldNamesLowerSnakeCaseRule;
pub use source::{read_all_lines, write_lines, LineEnding, SourceLines};
pub use span::Span;
pub use tracker::{IdentOccurrence, ViolationTracker};
pub use visitor::{run_visitor, FailureSink, RuleVisitor};
