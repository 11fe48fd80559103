use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Sensitivity tier assigned to a snapshot by the classification taxonomy.
///
/// Levels are opaque keys: any string is accepted, and a level with no rule
/// in the active rule set is evaluated under the `restricted` rule.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassificationLevel(String);

impl ClassificationLevel {
    /// Creates a classification level from a taxonomy key.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Freely shareable data.
    #[must_use]
    pub fn public() -> Self {
        Self::new("public")
    }

    /// Internal business data.
    #[must_use]
    pub fn internal() -> Self {
        Self::new("internal")
    }

    /// Confidential data with regulatory exposure.
    #[must_use]
    pub fn confidential() -> Self {
        Self::new("confidential")
    }

    /// Most sensitive tier; also the fail-safe for unknown levels.
    #[must_use]
    pub fn restricted() -> Self {
        Self::new("restricted")
    }

    /// Returns the taxonomy key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for ClassificationLevel {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ClassificationLevel {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for ClassificationLevel {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.0.as_str())
    }
}

/// Category of sensitive content present in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataType(String);

impl DataType {
    /// Creates a data type from a taxonomy key.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Personally identifiable information.
    #[must_use]
    pub fn personal_data() -> Self {
        Self::new("personal_data")
    }

    /// Protected health information.
    #[must_use]
    pub fn health_data() -> Self {
        Self::new("health_data")
    }

    /// Cardholder and payment records.
    #[must_use]
    pub fn payment_data() -> Self {
        Self::new("payment_data")
    }

    /// Trade secrets and other proprietary material.
    #[must_use]
    pub fn proprietary() -> Self {
        Self::new("proprietary")
    }

    /// Content with no special handling requirements.
    #[must_use]
    pub fn general() -> Self {
        Self::new("general")
    }

    /// Returns the taxonomy key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for DataType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for DataType {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for DataType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.0.as_str())
    }
}
