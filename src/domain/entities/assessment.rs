use serde::{Deserialize, Serialize};

use crate::domain::value_objects::severity::Severity;

/// Outcome of one device pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceStatus {
    Assessed,
    SmartUnavailable,
    QueryFailed,
}

/// An attribute together with the severity it was reported at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedAttribute {
    pub id: u8,
    pub name: String,
    pub raw_value: u64,
    pub raw_text: String,
    pub severity: Severity,
}

/// Structured result of reporting on a device, used for `--json` output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceAssessment {
    pub device_path: String,
    pub status: DeviceStatus,
    pub health: Option<String>,
    pub attributes: Vec<ClassifiedAttribute>,
}

impl DeviceAssessment {
    #[must_use]
    pub fn failed(device_path: &str, status: DeviceStatus) -> Self {
        Self {
            device_path: device_path.to_string(),
            status,
            health: None,
            attributes: Vec::new(),
        }
    }
}
