//! Project settings definitions.
//!
//! Maps the `.protostyle.yml` file found at the project root.

use serde::{Deserialize, Serialize};

use crate::lint::OutputFormat;

/// Settings for a lint run. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LintSettings {
    /// Rename offending identifiers in the schema source.
    #[serde(skip_serializing_if = "is_false")]
    pub fix: bool,

    /// Output format for diagnostics.
    pub format: OutputFormat,

    /// Treat warnings as errors.
    #[serde(skip_serializing_if = "is_false")]
    pub strict: bool,
}

impl LintSettings {
    /// Apply command-line overrides. Flags can only switch options on;
    /// an explicit format replaces the configured one.
    pub fn with_overrides(mut self, fix: bool, strict: bool, format: Option<OutputFormat>) -> Self {
        self.fix |= fix;
        self.strict |= strict;
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}

fn is_false(v: &bool) -> bool {
    !v
}
