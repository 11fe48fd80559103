use chrono::{DateTime, Utc};
use retentia_domain::{ClassificationLevel, DataType};
use serde::{Deserialize, Serialize};

/// Snapshot facts supplied by the snapshot store for one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotRetentionInput {
    /// Snapshot identifier owned by the snapshot store.
    pub snapshot_id: String,
    /// Snapshot creation time.
    pub created_at: DateTime<Utc>,
    /// Classification assigned to the snapshot.
    pub classification_level: ClassificationLevel,
    /// Data types tagged on the snapshot.
    #[serde(default)]
    pub data_types: Vec<DataType>,
    /// Current legal-hold flag.
    #[serde(default)]
    pub is_on_legal_hold: bool,
}

/// One snapshot considered by a dry run, with its storage footprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DryRunCandidate {
    /// Snapshot facts to evaluate.
    pub input: SnapshotRetentionInput,
    /// Stored size in bytes.
    pub size_bytes: u64,
}
