pub mod diagnostics;
pub mod sink;

pub use diagnostics::{DeviceSource, DiagnosticOutput, DiagnosticTool, ScanError};
pub use sink::{LogSink, SinkError};
