pub mod device_scanner;
pub mod smartctl;

pub use device_scanner::DeviceScanner;
pub use smartctl::SmartctlTool;
