use serde::{Deserialize, Serialize};

/// Severity tier of an emitted message, ordered by increasing urgency
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Notice,
    Warn,
    Error,
    Fatal,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Severity {
    pub const ALL: [Self; 7] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Notice,
        Self::Warn,
        Self::Error,
        Self::Fatal,
    ];

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Notice => "NOTICE",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }

    /// NOTICE and above reach the terminal regardless of verbosity.
    #[must_use]
    pub const fn is_always_shown(&self) -> bool {
        matches!(self, Self::Notice | Self::Warn | Self::Error | Self::Fatal)
    }

    #[must_use]
    pub const fn color(&self) -> &str {
        match self {
            Self::Trace => "bright black",
            Self::Debug => "cyan",
            Self::Info => "blue",
            Self::Notice => "green",
            Self::Warn => "yellow",
            Self::Error => "red",
            Self::Fatal => "bright red",
        }
    }
}
