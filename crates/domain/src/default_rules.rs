use std::collections::BTreeMap;

use crate::{ClassificationLevel, ClassificationRule, DataType, RetentionDuration};

const PUBLIC: RetentionDuration = RetentionDuration::from_valid_days(30, 90);
const INTERNAL: RetentionDuration = RetentionDuration::from_valid_days(90, 365);
const CONFIDENTIAL: RetentionDuration = RetentionDuration::from_valid_days(365, 2555);
const CONFIDENTIAL_PERSONAL_DATA: RetentionDuration =
    RetentionDuration::from_valid_days(1095, 2555);
// Restricted snapshots are only ever removed manually.
const RESTRICTED: RetentionDuration = RetentionDuration::from_valid_days(1095, 0);
const RESTRICTED_HEALTH_DATA: RetentionDuration = RetentionDuration::from_valid_days(2190, 0);
const RESTRICTED_PAYMENT_DATA: RetentionDuration = RetentionDuration::from_valid_days(1825, 2555);

/// Returns the built-in rules for the four standard classification levels.
///
/// | level        | min  | max  | overrides                                   |
/// |--------------|------|------|---------------------------------------------|
/// | public       | 30   | 90   |                                             |
/// | internal     | 90   | 365  |                                             |
/// | confidential | 365  | 2555 | personal_data 1095..2555                    |
/// | restricted   | 1095 | none | health_data 2190..none, payment_data 1825..2555 |
#[must_use]
pub fn default_rule_set() -> Vec<ClassificationRule> {
    vec![
        ClassificationRule::from_valid_parts(
            ClassificationLevel::public(),
            PUBLIC,
            BTreeMap::new(),
        ),
        ClassificationRule::from_valid_parts(
            ClassificationLevel::internal(),
            INTERNAL,
            BTreeMap::new(),
        ),
        ClassificationRule::from_valid_parts(
            ClassificationLevel::confidential(),
            CONFIDENTIAL,
            BTreeMap::from([(DataType::personal_data(), CONFIDENTIAL_PERSONAL_DATA)]),
        ),
        ClassificationRule::from_valid_parts(
            ClassificationLevel::restricted(),
            RESTRICTED,
            BTreeMap::from([
                (DataType::health_data(), RESTRICTED_HEALTH_DATA),
                (DataType::payment_data(), RESTRICTED_PAYMENT_DATA),
            ]),
        ),
    ]
}
