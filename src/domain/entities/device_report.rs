use serde::{Deserialize, Serialize};

use super::attribute::AttributeObservation;

/// Verdict string `smartctl` prints when the self-assessment passes.
pub const HEALTH_PASSED: &str = "PASSED";

/// Parsed `smartctl` output for a single device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceReport {
    pub device_path: String,
    pub smart_capable: bool,
    pub overall_health: String,
    /// In the order the tool printed them
    pub observations: Vec<AttributeObservation>,
}

impl DeviceReport {
    #[must_use]
    pub fn unavailable(device_path: &str) -> Self {
        Self {
            device_path: device_path.to_string(),
            smart_capable: false,
            overall_health: String::new(),
            observations: Vec::new(),
        }
    }

    /// Exact, case-sensitive comparison; `"PASSED "` or `"passed"` do not count.
    #[must_use]
    pub fn health_passed(&self) -> bool {
        self.overall_health == HEALTH_PASSED
    }
}
