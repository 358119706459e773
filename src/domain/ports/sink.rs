use thiserror::Error;

use crate::domain::value_objects::severity::Severity;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("failed to write log entry: {0}")]
    WriteFailed(String),
    #[error("log destination unavailable: {0}")]
    Unavailable(String),
}

/// Destination for leveled messages.
///
/// Implementations decide visibility and decoration; callers always emit at
/// the semantically correct severity and never filter on their own.
pub trait LogSink: Send + Sync {
    /// Record a single message at the given severity.
    ///
    /// # Errors
    ///
    /// Returns `SinkError` if the message cannot be written.
    fn emit(&self, severity: Severity, message: &str) -> Result<(), SinkError>;

    /// Record a blank line separating two device blocks.
    ///
    /// # Errors
    ///
    /// Returns `SinkError` if the separator cannot be written.
    fn separator(&self) -> Result<(), SinkError>;

    /// Push any buffered output to its destination.
    ///
    /// # Errors
    ///
    /// Returns `SinkError` if buffered output cannot be written.
    fn flush(&self) -> Result<(), SinkError> {
        Ok(())
    }
}
