use chrono::{DateTime, Utc};
use retentia_domain::{ClassificationLevel, ClassificationRule, RetentionAction, RetentionDuration};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{RetentionEvaluator, SnapshotRetentionInput};

/// Minimum retention applied when the rule set has no usable rule at all.
const ABSOLUTE_FALLBACK_MIN_DAYS: i64 = 365;

/// Outcome of evaluating one snapshot against the retention rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEvaluation {
    snapshot_id: String,
    action: RetentionAction,
    reason: String,
    snapshot_age_days: i64,
    min_retention_days: i64,
    max_retention_days: i64,
    days_until_deletable: i64,
    days_until_auto_delete: i64,
    classification_level: ClassificationLevel,
    is_on_legal_hold: bool,
}

impl SnapshotEvaluation {
    /// Returns the evaluated snapshot id.
    #[must_use]
    pub fn snapshot_id(&self) -> &str {
        self.snapshot_id.as_str()
    }

    /// Returns the permitted or required action.
    #[must_use]
    pub fn action(&self) -> RetentionAction {
        self.action
    }

    /// Returns the human-readable audit explanation.
    #[must_use]
    pub fn reason(&self) -> &str {
        self.reason.as_str()
    }

    /// Returns the snapshot age in whole days at evaluation time.
    #[must_use]
    pub fn snapshot_age_days(&self) -> i64 {
        self.snapshot_age_days
    }

    /// Returns the effective minimum retention in days.
    #[must_use]
    pub fn min_retention_days(&self) -> i64 {
        self.min_retention_days
    }

    /// Returns the effective maximum retention in days, 0 when uncapped.
    #[must_use]
    pub fn max_retention_days(&self) -> i64 {
        self.max_retention_days
    }

    /// Returns days left until deletion is allowed; negative once it is.
    #[must_use]
    pub fn days_until_deletable(&self) -> i64 {
        self.days_until_deletable
    }

    /// Returns days left until deletion is required, 0 when uncapped.
    #[must_use]
    pub fn days_until_auto_delete(&self) -> i64 {
        self.days_until_auto_delete
    }

    /// Returns the classification level supplied for the snapshot.
    #[must_use]
    pub fn classification_level(&self) -> &ClassificationLevel {
        &self.classification_level
    }

    /// Returns whether the snapshot was on legal hold.
    #[must_use]
    pub fn is_on_legal_hold(&self) -> bool {
        self.is_on_legal_hold
    }
}

/// Rule chosen for a snapshot after applying the fallback chain.
enum RuleMatch<'a> {
    Exact(&'a ClassificationRule),
    Restricted(&'a ClassificationRule),
    Missing,
}

impl RetentionEvaluator {
    /// Evaluates one snapshot at the current time.
    #[must_use]
    pub fn evaluate_snapshot(&self, input: &SnapshotRetentionInput) -> SnapshotEvaluation {
        self.evaluate_snapshot_at(input, Utc::now())
    }

    /// Evaluates one snapshot as of `now`.
    ///
    /// Never fails: a legal hold always yields [`RetentionAction::Hold`], an
    /// unknown classification is evaluated under the `restricted` rule, and a
    /// rule set without a `restricted` rule keeps the snapshot.
    #[must_use]
    pub fn evaluate_snapshot_at(
        &self,
        input: &SnapshotRetentionInput,
        now: DateTime<Utc>,
    ) -> SnapshotEvaluation {
        let age_days = (now - input.created_at).num_hours() / 24;

        let evaluation = if input.is_on_legal_hold {
            hold_evaluation(input, age_days)
        } else {
            match self.match_rule(&input.classification_level) {
                RuleMatch::Exact(rule) => decide(input, age_days, merged_window(rule, input), None),
                RuleMatch::Restricted(rule) => {
                    warn!(
                        snapshot_id = %input.snapshot_id,
                        classification_level = %input.classification_level,
                        "no retention rule for classification, applying restricted rule"
                    );
                    decide(
                        input,
                        age_days,
                        merged_window(rule, input),
                        Some(rule.level()),
                    )
                }
                RuleMatch::Missing => {
                    warn!(
                        snapshot_id = %input.snapshot_id,
                        classification_level = %input.classification_level,
                        "no retention rule and no restricted rule, retaining snapshot"
                    );
                    missing_policy_evaluation(input, age_days)
                }
            }
        };

        debug!(
            snapshot_id = %evaluation.snapshot_id,
            action = evaluation.action.as_str(),
            snapshot_age_days = evaluation.snapshot_age_days,
            min_retention_days = evaluation.min_retention_days,
            max_retention_days = evaluation.max_retention_days,
            "snapshot retention evaluated"
        );

        evaluation
    }

    fn match_rule(&self, level: &ClassificationLevel) -> RuleMatch<'_> {
        if let Some(rule) = self.rule_set.rule_for(level) {
            return RuleMatch::Exact(rule);
        }

        if let Some(rule) = self.rule_set.rule_for(&ClassificationLevel::restricted()) {
            return RuleMatch::Restricted(rule);
        }

        RuleMatch::Missing
    }
}

fn merged_window(rule: &ClassificationRule, input: &SnapshotRetentionInput) -> RetentionDuration {
    input
        .data_types
        .iter()
        .fold(rule.retention(), |window, data_type| {
            window.merge_most_restrictive(&rule.effective_retention(data_type))
        })
}

fn decide(
    input: &SnapshotRetentionInput,
    age_days: i64,
    window: RetentionDuration,
    fallback_level: Option<&ClassificationLevel>,
) -> SnapshotEvaluation {
    let min_days = window.min_days();
    let max_days = window.max_days();
    let days_until_deletable = min_days.saturating_sub(age_days);
    let days_until_auto_delete = if window.has_cap() {
        max_days.saturating_sub(age_days)
    } else {
        0
    };

    let (action, mut reason) = if age_days < min_days {
        (
            RetentionAction::Keep,
            format!(
                "within minimum retention of {min_days} days required for compliance; \
                 deletable in {days_until_deletable} days"
            ),
        )
    } else if window.has_cap() && age_days >= max_days {
        (
            RetentionAction::MustDelete,
            format!("exceeded maximum retention of {max_days} days; deletion required"),
        )
    } else if window.has_cap() {
        (
            RetentionAction::CanDelete,
            format!(
                "minimum retention of {min_days} days met; may be deleted before maximum \
                 retention of {max_days} days, automatic deletion in {days_until_auto_delete} days"
            ),
        )
    } else {
        (
            RetentionAction::CanDelete,
            format!(
                "minimum retention of {min_days} days met; no maximum retention configured, \
                 deletion is optional"
            ),
        )
    };

    if let Some(level) = fallback_level {
        reason.push_str(&format!(
            " (classification '{}' has no rule, evaluated as '{level}')",
            input.classification_level
        ));
    }

    SnapshotEvaluation {
        snapshot_id: input.snapshot_id.clone(),
        action,
        reason,
        snapshot_age_days: age_days,
        min_retention_days: min_days,
        max_retention_days: max_days,
        days_until_deletable,
        days_until_auto_delete,
        classification_level: input.classification_level.clone(),
        is_on_legal_hold: false,
    }
}

fn hold_evaluation(input: &SnapshotRetentionInput, age_days: i64) -> SnapshotEvaluation {
    SnapshotEvaluation {
        snapshot_id: input.snapshot_id.clone(),
        action: RetentionAction::Hold,
        reason: "snapshot is on legal hold; all deletion is suspended".to_owned(),
        snapshot_age_days: age_days,
        min_retention_days: 0,
        max_retention_days: 0,
        days_until_deletable: 0,
        days_until_auto_delete: 0,
        classification_level: input.classification_level.clone(),
        is_on_legal_hold: true,
    }
}

fn missing_policy_evaluation(input: &SnapshotRetentionInput, age_days: i64) -> SnapshotEvaluation {
    SnapshotEvaluation {
        snapshot_id: input.snapshot_id.clone(),
        action: RetentionAction::Keep,
        reason: format!(
            "no retention policy found for classification '{}'; retaining for at least \
             {ABSOLUTE_FALLBACK_MIN_DAYS} days",
            input.classification_level
        ),
        snapshot_age_days: age_days,
        min_retention_days: ABSOLUTE_FALLBACK_MIN_DAYS,
        max_retention_days: 0,
        days_until_deletable: ABSOLUTE_FALLBACK_MIN_DAYS.saturating_sub(age_days),
        days_until_auto_delete: 0,
        classification_level: input.classification_level.clone(),
        is_on_legal_hold: false,
    }
}
