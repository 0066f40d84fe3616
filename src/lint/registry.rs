//! Rule registry for managing lint rules.
//!
//! The [`RuleRegistry`] stores all available lint rules and provides
//! methods for registering, retrieving, and iterating over them.

use std::collections::BTreeMap;

use super::rule::{LintRule, RuleId};
use super::rules::FieldNamesLowerSnakeCaseRule;

/// Registry of all available lint rules, iterated in rule id order.
pub struct RuleRegistry {
    rules: BTreeMap<RuleId, Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Create a registry with all built-in rules.
    ///
    /// `fix_mode` is handed to every rule that can rewrite the source.
    pub fn with_builtins(fix_mode: bool) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(FieldNamesLowerSnakeCaseRule::new(fix_mode)));
        registry
    }

    /// Register a lint rule, replacing any rule with the same id.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        self.rules.insert(rule.id(), rule);
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&dyn LintRule> {
        self.rules.get(id).map(|r| r.as_ref())
    }

    /// Iterate over all rules.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules.values().map(|r| r.as_ref())
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
