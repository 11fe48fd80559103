//! Retention policy model: taxonomy keys, retention windows and rule sets.

#![forbid(unsafe_code)]

mod classification;
mod default_rules;
mod retention;
mod retention_action;
mod rule_set;

pub use classification::{ClassificationLevel, DataType};
pub use default_rules::default_rule_set;
pub use retention::{ClassificationRule, RetentionDuration};
pub use retention_action::RetentionAction;
pub use rule_set::RetentionRuleSet;
