use serde::{Deserialize, Serialize};

/// Attribute category as printed in the TYPE column of `smartctl -A`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeType {
    PreFail,
    OldAge,
    Other(String),
}

impl AttributeType {
    #[must_use]
    pub fn from_column(column: &str) -> Self {
        match column {
            "Pre-fail" => Self::PreFail,
            "Old_age" => Self::OldAge,
            other => Self::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for AttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PreFail => write!(f, "Pre-fail"),
            Self::OldAge => write!(f, "Old_age"),
            Self::Other(s) => write!(f, "{s}"),
        }
    }
}

/// Value of the UPDATED column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdateFrequency {
    Always,
    Offline,
    Other(String),
}

impl UpdateFrequency {
    #[must_use]
    pub fn from_column(column: &str) -> Self {
        match column {
            "Always" => Self::Always,
            "Offline" => Self::Offline,
            other => Self::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for UpdateFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Always => write!(f, "Always"),
            Self::Offline => write!(f, "Offline"),
            Self::Other(s) => write!(f, "{s}"),
        }
    }
}

/// One row of the vendor-specific S.M.A.R.T. attribute table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeObservation {
    pub id: u8,
    pub name: String,
    pub flag: String,
    pub value: u32,
    pub worst: u32,
    pub threshold: u32,
    pub attr_type: AttributeType,
    pub update_frequency: UpdateFrequency,
    /// `None` when the WHEN_FAILED column is `-`
    pub when_failed: Option<String>,
    pub raw_value: u64,
    pub raw_text: String,
}

impl AttributeObservation {
    /// Only continuously or periodically updated attributes feed the health assessment.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        matches!(
            self.update_frequency,
            UpdateFrequency::Always | UpdateFrequency::Offline
        )
    }
}
