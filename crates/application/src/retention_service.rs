use std::sync::Arc;

use retentia_core::{AppResult, NonEmptyString};
use retentia_domain::RetentionRuleSet;

mod config;
mod dry_run;
mod evaluation;
mod inputs;

pub use config::{ClassificationRuleConfig, DataTypeOverrideConfig, RetentionPolicyConfig};
pub use dry_run::DryRunResult;
pub use evaluation::SnapshotEvaluation;
pub use inputs::{DryRunCandidate, SnapshotRetentionInput};

/// Retention evaluator deciding keep/delete/hold actions for snapshots.
///
/// The rule set is immutable after construction, so one evaluator can be
/// cloned into or shared across worker threads. Evaluation itself keeps no
/// state between calls.
#[derive(Debug, Clone)]
pub struct RetentionEvaluator {
    rule_set: Arc<RetentionRuleSet>,
    policy_id: Option<NonEmptyString>,
}

impl RetentionEvaluator {
    /// Creates an evaluator over a caller-supplied rule set.
    #[must_use]
    pub fn new(rule_set: RetentionRuleSet) -> Self {
        Self {
            rule_set: Arc::new(rule_set),
            policy_id: None,
        }
    }

    /// Creates an evaluator over the built-in rule set.
    #[must_use]
    pub fn with_default_rules() -> Self {
        Self::new(RetentionRuleSet::default())
    }

    /// Creates an evaluator from a validated policy configuration.
    pub fn from_config(config: &RetentionPolicyConfig) -> AppResult<Self> {
        let evaluator = Self::new(config.to_rule_set()?);
        Ok(match config.policy_id()? {
            Some(policy_id) => evaluator.with_policy_id(policy_id),
            None => evaluator,
        })
    }

    /// Tags dry-run reports produced by this evaluator with a policy id.
    #[must_use]
    pub fn with_policy_id(mut self, policy_id: NonEmptyString) -> Self {
        self.policy_id = Some(policy_id);
        self
    }

    /// Returns the rule set used for evaluation.
    #[must_use]
    pub fn rule_set(&self) -> &RetentionRuleSet {
        &self.rule_set
    }

    /// Returns the policy id stamped on dry-run reports.
    #[must_use]
    pub fn policy_id(&self) -> Option<&NonEmptyString> {
        self.policy_id.as_ref()
    }
}

impl Default for RetentionEvaluator {
    fn default() -> Self {
        Self::with_default_rules()
    }
}
