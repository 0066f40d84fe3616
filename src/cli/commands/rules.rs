//! Rules command implementation.
//!
//! The `protostyle rules` command lists the registered lint rules.

use crate::error::Result;
use crate::lint::RuleRegistry;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The rules command implementation.
pub struct RulesCommand {
    registry: RuleRegistry,
}

impl RulesCommand {
    /// Create a rules command listing the built-in rules.
    pub fn new() -> Self {
        Self {
            registry: RuleRegistry::with_builtins(false),
        }
    }

    /// Create a rules command over an explicit registry.
    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self { registry }
    }
}

impl Default for RulesCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for RulesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        for rule in self.registry.iter() {
            let mut tags = vec![rule.default_severity().to_string()];
            if rule.is_official() {
                tags.push("official".to_string());
            }
            if rule.supports_fix() {
                tags.push("fixable".to_string());
            }

            ui.message(&format!("{} ({})", rule.id(), tags.join(", ")));
            ui.message(&format!("    {}", rule.purpose()));
        }

        Ok(CommandResult::success())
    }
}
