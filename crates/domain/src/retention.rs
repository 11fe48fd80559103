use std::collections::BTreeMap;

use retentia_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::{ClassificationLevel, DataType};

/// Retention window bounding how long a snapshot must or may be kept.
///
/// `max_days == 0` means no maximum: the snapshot is never auto-deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RetentionDurationInput")]
pub struct RetentionDuration {
    min_days: i64,
    max_days: i64,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RetentionDurationInput {
    min_days: i64,
    #[serde(default)]
    max_days: i64,
}

impl TryFrom<RetentionDurationInput> for RetentionDuration {
    type Error = AppError;

    fn try_from(input: RetentionDurationInput) -> Result<Self, Self::Error> {
        Self::new(input.min_days, input.max_days)
    }
}

impl RetentionDuration {
    /// Creates a validated retention window.
    pub fn new(min_days: i64, max_days: i64) -> AppResult<Self> {
        if !Self::validate(min_days, max_days) {
            return Err(AppError::Validation(format!(
                "invalid retention window min_days={min_days} max_days={max_days}: \
                 values must be non-negative and a non-zero maximum must not be below the minimum"
            )));
        }

        Ok(Self { min_days, max_days })
    }

    /// Builds a window from values already known to be valid.
    pub(crate) const fn from_valid_days(min_days: i64, max_days: i64) -> Self {
        Self { min_days, max_days }
    }

    /// Returns whether the given bounds form a valid window.
    #[must_use]
    pub fn validate(min_days: i64, max_days: i64) -> bool {
        if min_days < 0 || max_days < 0 {
            return false;
        }

        max_days == 0 || max_days >= min_days
    }

    /// Returns whether this window satisfies the validity invariant.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        Self::validate(self.min_days, self.max_days)
    }

    /// Returns the minimum number of days a snapshot must be kept.
    #[must_use]
    pub fn min_days(&self) -> i64 {
        self.min_days
    }

    /// Returns the maximum number of days a snapshot may be kept, 0 for none.
    #[must_use]
    pub fn max_days(&self) -> i64 {
        self.max_days
    }

    /// Returns whether a maximum retention applies.
    #[must_use]
    pub fn has_cap(&self) -> bool {
        self.max_days > 0
    }

    /// Combines two windows keeping the strictest retention obligation.
    ///
    /// The longer minimum wins. For the maximum, an uncapped `other` forces
    /// the result uncapped, and otherwise the larger cap wins while an
    /// already uncapped window stays uncapped. Requirements only accumulate,
    /// so a merged window never permits deletion earlier than either input.
    #[must_use]
    pub fn merge_most_restrictive(&self, other: &Self) -> Self {
        let min_days = self.min_days.max(other.min_days);
        let max_days = if other.max_days == 0 || (self.has_cap() && other.max_days > self.max_days)
        {
            other.max_days
        } else {
            self.max_days
        };

        Self { min_days, max_days }
    }
}

/// Retention policy for one classification level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationRule {
    level: ClassificationLevel,
    retention: RetentionDuration,
    data_type_overrides: BTreeMap<DataType, RetentionDuration>,
}

impl ClassificationRule {
    /// Creates a classification rule with optional per-data-type overrides.
    pub fn new(
        level: ClassificationLevel,
        retention: RetentionDuration,
        overrides: Vec<(DataType, RetentionDuration)>,
    ) -> AppResult<Self> {
        let mut data_type_overrides = BTreeMap::new();
        for (data_type, window) in overrides {
            if data_type_overrides.contains_key(&data_type) {
                return Err(AppError::Conflict(format!(
                    "duplicate retention override for data type '{data_type}' in level '{level}'"
                )));
            }
            data_type_overrides.insert(data_type, window);
        }

        Ok(Self {
            level,
            retention,
            data_type_overrides,
        })
    }

    /// Builds a rule from overrides already keyed uniquely.
    pub(crate) fn from_valid_parts(
        level: ClassificationLevel,
        retention: RetentionDuration,
        data_type_overrides: BTreeMap<DataType, RetentionDuration>,
    ) -> Self {
        Self {
            level,
            retention,
            data_type_overrides,
        }
    }

    /// Returns the classification level this rule applies to.
    #[must_use]
    pub fn level(&self) -> &ClassificationLevel {
        &self.level
    }

    /// Returns the base retention window for the level.
    #[must_use]
    pub fn retention(&self) -> RetentionDuration {
        self.retention
    }

    /// Returns per-data-type overrides keyed by data type.
    #[must_use]
    pub fn data_type_overrides(&self) -> &BTreeMap<DataType, RetentionDuration> {
        &self.data_type_overrides
    }

    /// Returns the window that applies to one data type under this rule.
    #[must_use]
    pub fn effective_retention(&self, data_type: &DataType) -> RetentionDuration {
        self.data_type_overrides
            .get(data_type)
            .copied()
            .unwrap_or(self.retention)
    }
}
