use crate::domain::ports::sink::{LogSink, SinkError};
use crate::domain::value_objects::severity::Severity;

/// Forwards every message to multiple sinks.
///
/// Calls each sink in order, collecting errors.
/// Returns the first error encountered (if any), but always calls all sinks.
pub struct CompositeSink {
    sinks: Vec<Box<dyn LogSink>>,
}

impl CompositeSink {
    #[must_use]
    pub fn new(sinks: Vec<Box<dyn LogSink>>) -> Self {
        Self { sinks }
    }

    fn each(
        &self,
        what: &str,
        f: impl Fn(&dyn LogSink) -> Result<(), SinkError>,
    ) -> Result<(), SinkError> {
        let mut first_error = None;
        for sink in &self.sinks {
            if let Err(e) = f(sink.as_ref()) {
                tracing::warn!("{what} failed: {e}");
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

impl Default for CompositeSink {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl LogSink for CompositeSink {
    fn emit(&self, severity: Severity, message: &str) -> Result<(), SinkError> {
        self.each("log write", |s| s.emit(severity, message))
    }

    fn separator(&self) -> Result<(), SinkError> {
        self.each("separator write", |s| s.separator())
    }

    fn flush(&self) -> Result<(), SinkError> {
        self.each("log flush", |s| s.flush())
    }
}
