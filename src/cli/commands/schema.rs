//! Schema command implementation.
//!
//! The `protostyle schema` command prints the JSON Schema that tree
//! documents must satisfy, for editor integration and parser authors.

use crate::error::Result;
use crate::schema::SchemaGenerator;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
pub struct SchemaCommand;

impl SchemaCommand {
    /// Create a new schema command.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SchemaCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for SchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let schema = SchemaGenerator::new().generate();
        let text = serde_json::to_string_pretty(&schema).map_err(anyhow::Error::from)?;
        ui.message(&text);
        Ok(CommandResult::success())
    }
}
