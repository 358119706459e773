use crate::application::error::RunError;
use crate::domain::ports::sink::LogSink;
use crate::domain::value_objects::severity::Severity;

pub const EXIT_SUCCESS: u8 = 0;

/// Run guard: guarantees the log is flushed however the run ends and turns
/// its outcome into a process exit code.
pub struct Session<'a> {
    sink: &'a dyn LogSink,
    finished: bool,
}

impl<'a> Session<'a> {
    #[must_use]
    pub const fn new(sink: &'a dyn LogSink) -> Self {
        Self {
            sink,
            finished: false,
        }
    }

    /// Close the run and return the exit code for `result`.
    pub fn finish<T>(mut self, result: &Result<T, RunError>) -> u8 {
        let code = match result {
            Ok(_) => EXIT_SUCCESS,
            Err(e) => {
                tracing::debug!("run failed: {e}");
                if let Err(sink_err) = self
                    .sink
                    .emit(Severity::Error, "smartlog did not complete successfully")
                {
                    tracing::warn!("Failed to record run failure: {sink_err}");
                }
                e.exit_code()
            }
        };
        self.flush();
        self.finished = true;
        code
    }

    fn flush(&self) {
        if let Err(e) = self.sink.flush() {
            tracing::warn!("Failed to flush log: {e}");
        }
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        if !self.finished {
            self.flush();
        }
    }
}
