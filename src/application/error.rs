use thiserror::Error;

use crate::domain::ports::diagnostics::ScanError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INTERRUPTED: u8 = 130;

/// Conditions that stop a whole run. Per-device and per-attribute problems
/// never surface here; they are logged and the run continues.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("cannot create scratch directory: {0}")]
    Scratch(#[source] std::io::Error),
    #[error(transparent)]
    Enumeration(#[from] ScanError),
    #[error("cannot write report output: {0}")]
    Output(#[source] std::io::Error),
    #[error("interrupted")]
    Interrupted,
}

impl RunError {
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Scratch(_) | Self::Enumeration(_) | Self::Output(_) => EXIT_FAILURE,
            Self::Interrupted => EXIT_INTERRUPTED,
        }
    }
}
