pub mod composite;
pub mod log_file;
pub mod terminal;

pub use composite::CompositeSink;
pub use log_file::LogFileSink;
pub use terminal::TerminalSink;

use chrono::{DateTime, Local};

use crate::domain::value_objects::severity::Severity;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `<timestamp> [<SEVERITY>] <message>`, the persisted line format.
#[must_use]
pub fn decorate(timestamp: &DateTime<Local>, severity: Severity, message: &str) -> String {
    format!(
        "{} [{}] {message}",
        timestamp.format(TIMESTAMP_FORMAT),
        severity.label()
    )
}
