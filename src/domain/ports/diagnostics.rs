use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("diagnostic tool {tool} unavailable: {reason}")]
    ToolUnavailable { tool: String, reason: String },
    #[error("failed to capture diagnostic output: {0}")]
    CaptureFailed(String),
    #[error("failed to enumerate devices: {0}")]
    EnumerationFailed(String),
}

/// Raw text produced by the diagnostic tool for one device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticOutput {
    pub text: String,
    /// `None` when the tool was terminated by a signal
    pub exit_code: Option<i32>,
}

impl DiagnosticOutput {
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        matches!(self.exit_code, Some(0))
    }
}

/// Lists the devices to report on, in reporting order.
pub trait DeviceSource: Send + Sync {
    /// Return existing device paths; identifiers that do not exist are skipped.
    ///
    /// # Errors
    ///
    /// Returns `ScanError::EnumerationFailed` if the device namespace cannot be read.
    fn devices(&self) -> Result<Vec<PathBuf>, ScanError>;
}

/// Stand-in for the external S.M.A.R.T. query tool.
pub trait DiagnosticTool: Send + Sync {
    /// Query one device. `scratch` is a directory the tool may use for
    /// temporary captures; it outlives the call.
    ///
    /// A non-zero exit of the tool is not an error: the output is returned
    /// with its exit code so the caller can still parse it.
    ///
    /// # Errors
    ///
    /// Returns `ScanError::ToolUnavailable` if the tool cannot be started and
    /// `ScanError::CaptureFailed` if its output cannot be captured.
    fn query(&self, device: &Path, scratch: &Path) -> Result<DiagnosticOutput, ScanError>;
}
