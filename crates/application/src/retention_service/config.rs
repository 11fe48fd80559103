use retentia_core::{AppError, AppResult, NonEmptyString};
use retentia_domain::{
    ClassificationLevel, ClassificationRule, DataType, RetentionDuration, RetentionRuleSet,
    default_rule_set,
};
use serde::{Deserialize, Serialize};

/// Retention policy configuration loaded by the host process.
///
/// Parsing only checks shape; [`RetentionPolicyConfig::to_rule_set`]
/// enforces retention window and uniqueness invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RetentionPolicyConfig {
    /// Optional id stamped on dry-run reports.
    #[serde(default)]
    pub policy_id: Option<String>,
    /// Rules, at most one per classification level.
    pub rules: Vec<ClassificationRuleConfig>,
}

/// Configuration of one classification rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassificationRuleConfig {
    /// Classification level key.
    pub level: String,
    /// Minimum retention in days.
    pub min_days: i64,
    /// Maximum retention in days, 0 for none.
    #[serde(default)]
    pub max_days: i64,
    /// Per-data-type retention overrides.
    #[serde(default)]
    pub overrides: Vec<DataTypeOverrideConfig>,
}

/// Configuration of one data-type override within a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataTypeOverrideConfig {
    /// Data type key.
    pub data_type: String,
    /// Minimum retention in days.
    pub min_days: i64,
    /// Maximum retention in days, 0 for none.
    #[serde(default)]
    pub max_days: i64,
}

impl RetentionPolicyConfig {
    /// Builds a validated rule set from the configured rules.
    pub fn to_rule_set(&self) -> AppResult<RetentionRuleSet> {
        if self.rules.is_empty() {
            return Err(AppError::Validation(
                "retention policy must define at least one rule".to_owned(),
            ));
        }

        let rules = self
            .rules
            .iter()
            .map(ClassificationRuleConfig::to_rule)
            .collect::<AppResult<Vec<_>>>()?;

        RetentionRuleSet::new(rules)
    }

    /// Returns the validated policy id, when configured.
    pub fn policy_id(&self) -> AppResult<Option<NonEmptyString>> {
        self.policy_id.clone().map(NonEmptyString::new).transpose()
    }
}

impl Default for RetentionPolicyConfig {
    fn default() -> Self {
        Self {
            policy_id: None,
            rules: default_rule_set()
                .iter()
                .map(ClassificationRuleConfig::from_rule)
                .collect(),
        }
    }
}

impl ClassificationRuleConfig {
    fn to_rule(&self) -> AppResult<ClassificationRule> {
        let level = NonEmptyString::new(self.level.as_str()).map_err(|_| {
            AppError::Validation("classification rule level must not be empty".to_owned())
        })?;
        let retention = RetentionDuration::new(self.min_days, self.max_days)?;
        let overrides = self
            .overrides
            .iter()
            .map(|entry| {
                let data_type = NonEmptyString::new(entry.data_type.as_str()).map_err(|_| {
                    AppError::Validation(format!(
                        "data type override in level '{}' must name a data type",
                        self.level
                    ))
                })?;
                let window = RetentionDuration::new(entry.min_days, entry.max_days)?;
                Ok((DataType::new(String::from(data_type)), window))
            })
            .collect::<AppResult<Vec<_>>>()?;

        ClassificationRule::new(
            ClassificationLevel::new(String::from(level)),
            retention,
            overrides,
        )
    }

    fn from_rule(rule: &ClassificationRule) -> Self {
        Self {
            level: rule.level().as_str().to_owned(),
            min_days: rule.retention().min_days(),
            max_days: rule.retention().max_days(),
            overrides: rule
                .data_type_overrides()
                .iter()
                .map(|(data_type, window)| DataTypeOverrideConfig {
                    data_type: data_type.as_str().to_owned(),
                    min_days: window.min_days(),
                    max_days: window.max_days(),
                })
                .collect(),
        }
    }
}
