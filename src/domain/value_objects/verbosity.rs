use serde::{Deserialize, Serialize};

use super::severity::Severity;

/// Which of the quiet tiers (TRACE, DEBUG, INFO) reach the terminal
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Verbosity {
    pub trace: bool,
    pub debug: bool,
    pub verbose: bool,
}

impl Verbosity {
    #[must_use]
    pub const fn new(trace: bool, debug: bool, verbose: bool) -> Self {
        Self {
            trace,
            debug,
            verbose,
        }
    }

    /// Each flag enables exactly its own tier; enabling TRACE does not imply INFO.
    #[must_use]
    pub const fn shows(&self, severity: Severity) -> bool {
        severity.is_always_shown()
            || match severity {
                Severity::Trace => self.trace,
                Severity::Debug => self.debug,
                Severity::Info => self.verbose,
                _ => false,
            }
    }
}
