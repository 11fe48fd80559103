//! Application services for retention policy evaluation.

#![forbid(unsafe_code)]

mod retention_service;

pub use retention_service::{
    ClassificationRuleConfig, DataTypeOverrideConfig, DryRunCandidate, DryRunResult,
    RetentionEvaluator, RetentionPolicyConfig, SnapshotEvaluation, SnapshotRetentionInput,
};
