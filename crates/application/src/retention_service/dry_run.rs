use chrono::{DateTime, Utc};
use retentia_core::NonEmptyString;
use retentia_domain::RetentionAction;
use serde::Serialize;
use tracing::info;

use super::{DryRunCandidate, RetentionEvaluator, SnapshotEvaluation};

/// Audit report accumulated over a bulk, non-destructive evaluation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DryRunResult {
    evaluated_at: DateTime<Utc>,
    policy_id: Option<NonEmptyString>,
    total_snapshots: u64,
    keep_count: u64,
    can_delete_count: u64,
    must_delete_count: u64,
    hold_count: u64,
    evaluations: Vec<SnapshotEvaluation>,
    total_size_to_delete_bytes: u64,
}

impl DryRunResult {
    /// Creates an empty report stamped with the evaluation time.
    #[must_use]
    pub fn new(evaluated_at: DateTime<Utc>) -> Self {
        Self {
            evaluated_at,
            policy_id: None,
            total_snapshots: 0,
            keep_count: 0,
            can_delete_count: 0,
            must_delete_count: 0,
            hold_count: 0,
            evaluations: Vec::new(),
            total_size_to_delete_bytes: 0,
        }
    }

    /// Attaches the id of the policy the report was produced under.
    #[must_use]
    pub fn with_policy_id(mut self, policy_id: NonEmptyString) -> Self {
        self.policy_id = Some(policy_id);
        self
    }

    /// Records one evaluation and, for deletions, the bytes it would reclaim.
    pub fn add_evaluation(&mut self, evaluation: SnapshotEvaluation, size_bytes: u64) {
        self.total_snapshots += 1;
        match evaluation.action() {
            RetentionAction::Keep => self.keep_count += 1,
            RetentionAction::CanDelete => self.can_delete_count += 1,
            RetentionAction::MustDelete => self.must_delete_count += 1,
            RetentionAction::Hold => self.hold_count += 1,
        }

        if evaluation.action().is_deletion() {
            self.total_size_to_delete_bytes =
                self.total_size_to_delete_bytes.saturating_add(size_bytes);
        }

        self.evaluations.push(evaluation);
    }

    /// Returns when the dry run was evaluated.
    #[must_use]
    pub fn evaluated_at(&self) -> DateTime<Utc> {
        self.evaluated_at
    }

    /// Returns the policy id, when one was attached.
    #[must_use]
    pub fn policy_id(&self) -> Option<&NonEmptyString> {
        self.policy_id.as_ref()
    }

    /// Returns the number of evaluated snapshots.
    #[must_use]
    pub fn total_snapshots(&self) -> u64 {
        self.total_snapshots
    }

    /// Returns the number of snapshots that must be kept.
    #[must_use]
    pub fn keep_count(&self) -> u64 {
        self.keep_count
    }

    /// Returns the number of snapshots that may be deleted.
    #[must_use]
    pub fn can_delete_count(&self) -> u64 {
        self.can_delete_count
    }

    /// Returns the number of snapshots that must be deleted.
    #[must_use]
    pub fn must_delete_count(&self) -> u64 {
        self.must_delete_count
    }

    /// Returns the number of snapshots on legal hold.
    #[must_use]
    pub fn hold_count(&self) -> u64 {
        self.hold_count
    }

    /// Returns evaluations in the order they were added.
    #[must_use]
    pub fn evaluations(&self) -> &[SnapshotEvaluation] {
        &self.evaluations
    }

    /// Returns the bytes reclaimable by deleting every deletion candidate.
    #[must_use]
    pub fn total_size_to_delete_bytes(&self) -> u64 {
        self.total_size_to_delete_bytes
    }

    /// Returns evaluations a deletion executor would act on.
    pub fn deletion_candidates(&self) -> impl Iterator<Item = &SnapshotEvaluation> {
        self.evaluations
            .iter()
            .filter(|evaluation| evaluation.action().is_deletion())
    }
}

impl RetentionEvaluator {
    /// Evaluates every candidate as of `now` and aggregates a dry-run report.
    pub fn dry_run<I>(&self, candidates: I, now: DateTime<Utc>) -> DryRunResult
    where
        I: IntoIterator<Item = DryRunCandidate>,
    {
        let mut result = DryRunResult::new(now);
        if let Some(policy_id) = self.policy_id.clone() {
            result = result.with_policy_id(policy_id);
        }

        for candidate in candidates {
            let evaluation = self.evaluate_snapshot_at(&candidate.input, now);
            result.add_evaluation(evaluation, candidate.size_bytes);
        }

        info!(
            policy_id = result.policy_id().map(NonEmptyString::as_str),
            total_snapshots = result.total_snapshots,
            keep_count = result.keep_count,
            can_delete_count = result.can_delete_count,
            must_delete_count = result.must_delete_count,
            hold_count = result.hold_count,
            total_size_to_delete_bytes = result.total_size_to_delete_bytes,
            "retention dry run completed"
        );

        result
    }
}
