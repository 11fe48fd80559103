use std::collections::HashMap;

use retentia_core::{AppError, AppResult};

use crate::{ClassificationLevel, ClassificationRule, default_rule_set};

/// Immutable, ordered set of classification rules with at most one rule per level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetentionRuleSet {
    rules: Vec<ClassificationRule>,
    index: HashMap<ClassificationLevel, usize>,
}

impl RetentionRuleSet {
    /// Creates a rule set, rejecting more than one rule for the same level.
    pub fn new(rules: Vec<ClassificationRule>) -> AppResult<Self> {
        let mut index = HashMap::with_capacity(rules.len());
        for (position, rule) in rules.iter().enumerate() {
            if index.insert(rule.level().clone(), position).is_some() {
                return Err(AppError::Conflict(format!(
                    "duplicate retention rule for classification level '{}'",
                    rule.level()
                )));
            }
        }

        Ok(Self { rules, index })
    }

    /// Returns the rule registered for a level, if any.
    #[must_use]
    pub fn rule_for(&self, level: &ClassificationLevel) -> Option<&ClassificationRule> {
        self.index
            .get(level)
            .and_then(|position| self.rules.get(*position))
    }

    /// Returns rules in registration order.
    #[must_use]
    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns whether the set holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RetentionRuleSet {
    fn default() -> Self {
        let rules = default_rule_set();
        let index = rules
            .iter()
            .enumerate()
            .map(|(position, rule)| (rule.level().clone(), position))
            .collect();

        Self { rules, index }
    }
}
