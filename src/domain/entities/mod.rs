pub mod assessment;
pub mod attribute;
pub mod device_report;

pub use assessment::{ClassifiedAttribute, DeviceAssessment, DeviceStatus};
pub use attribute::{AttributeObservation, AttributeType, UpdateFrequency};
pub use device_report::{DeviceReport, HEALTH_PASSED};
