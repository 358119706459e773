use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::domain::ports::diagnostics::{DiagnosticOutput, DiagnosticTool, ScanError};

const DEFAULT_BINARY: &str = "smartctl";

/// Runs `smartctl -a <device>` and captures its report.
///
/// Stdout is redirected into a temporary file inside the scratch directory,
/// which is removed as soon as the report has been read back.
pub struct SmartctlTool {
    binary: PathBuf,
}

impl SmartctlTool {
    #[must_use]
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    #[must_use]
    pub fn binary(&self) -> &Path {
        &self.binary
    }
}

impl Default for SmartctlTool {
    fn default() -> Self {
        Self::new(DEFAULT_BINARY)
    }
}

impl DiagnosticTool for SmartctlTool {
    fn query(&self, device: &Path, scratch: &Path) -> Result<DiagnosticOutput, ScanError> {
        let mut capture = tempfile::Builder::new()
            .prefix("smartctl-")
            .suffix(".txt")
            .tempfile_in(scratch)
            .map_err(|e| {
                ScanError::CaptureFailed(format!(
                    "cannot create capture file in {}: {e}",
                    scratch.display()
                ))
            })?;
        let child_stdout = capture
            .reopen()
            .map_err(|e| ScanError::CaptureFailed(format!("cannot reopen capture file: {e}")))?;

        tracing::debug!("running {} -a {}", self.binary.display(), device.display());
        let status = Command::new(&self.binary)
            .arg("-a")
            .arg(device)
            .stdin(Stdio::null())
            .stdout(Stdio::from(child_stdout))
            .stderr(Stdio::null())
            .status()
            .map_err(|e| ScanError::ToolUnavailable {
                tool: self.binary.display().to_string(),
                reason: e.to_string(),
            })?;

        let mut bytes = Vec::new();
        capture
            .as_file_mut()
            .read_to_end(&mut bytes)
            .map_err(|e| ScanError::CaptureFailed(format!("cannot read capture file: {e}")))?;

        Ok(DiagnosticOutput {
            text: String::from_utf8_lossy(&bytes).into_owned(),
            exit_code: status.code(),
        })
    }
}
