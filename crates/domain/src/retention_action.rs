use std::str::FromStr;

use retentia_core::AppError;
use serde::{Deserialize, Serialize};

/// Action a retention evaluation permits or requires for one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetentionAction {
    /// Snapshot is within its minimum retention and must be kept.
    Keep,
    /// Minimum retention has elapsed; deletion is allowed but optional.
    CanDelete,
    /// Maximum retention has elapsed; the snapshot must be deleted.
    MustDelete,
    /// Snapshot is on legal hold; every deletion is suspended.
    Hold,
}

impl RetentionAction {
    /// Returns a stable storage value for this action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Keep => "keep",
            Self::CanDelete => "can_delete",
            Self::MustDelete => "must_delete",
            Self::Hold => "hold",
        }
    }

    /// Returns whether the action recommends removing the snapshot.
    #[must_use]
    pub fn is_deletion(&self) -> bool {
        matches!(self, Self::CanDelete | Self::MustDelete)
    }

    /// Returns all known actions.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[RetentionAction] = &[
            RetentionAction::Keep,
            RetentionAction::CanDelete,
            RetentionAction::MustDelete,
            RetentionAction::Hold,
        ];

        ALL
    }
}

impl FromStr for RetentionAction {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "keep" => Ok(Self::Keep),
            "can_delete" => Ok(Self::CanDelete),
            "must_delete" => Ok(Self::MustDelete),
            "hold" => Ok(Self::Hold),
            _ => Err(AppError::Validation(format!(
                "unknown retention action value '{value}'"
            ))),
        }
    }
}
