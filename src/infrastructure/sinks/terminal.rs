use std::borrow::Cow;
use std::io::Write;

use chrono::Local;
use colored::Colorize;

use crate::domain::ports::sink::{LogSink, SinkError};
use crate::domain::value_objects::severity::Severity;
use crate::domain::value_objects::verbosity::Verbosity;

use super::TIMESTAMP_FORMAT;

/// Prints leveled messages to the terminal.
///
/// NOTICE and above are always printed; TRACE/DEBUG/INFO only when the
/// matching verbosity flag is set. ERROR and FATAL go to stderr.
pub struct TerminalSink {
    verbosity: Verbosity,
    color: bool,
}

impl TerminalSink {
    #[must_use]
    pub const fn new(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    #[must_use]
    pub fn render(&self, severity: Severity, message: &str) -> String {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let tag = format!("[{}]", severity.label());
        if self.color {
            format!(
                "{} {} {}",
                timestamp.dimmed(),
                severity_badge(severity, &tag),
                sanitize(message)
            )
        } else {
            format!("{timestamp} {tag} {}", sanitize(message))
        }
    }
}

impl Default for TerminalSink {
    fn default() -> Self {
        Self::new(Verbosity::default(), true)
    }
}

impl LogSink for TerminalSink {
    fn emit(&self, severity: Severity, message: &str) -> Result<(), SinkError> {
        if !self.verbosity.shows(severity) {
            return Ok(());
        }
        let line = self.render(severity, message);
        let written = if severity >= Severity::Error {
            writeln!(std::io::stderr().lock(), "{line}")
        } else {
            writeln!(std::io::stdout().lock(), "{line}")
        };
        written.map_err(|e| SinkError::WriteFailed(format!("terminal: {e}")))
    }

    fn separator(&self) -> Result<(), SinkError> {
        writeln!(std::io::stdout().lock())
            .map_err(|e| SinkError::WriteFailed(format!("terminal: {e}")))
    }

    fn flush(&self) -> Result<(), SinkError> {
        std::io::stdout()
            .flush()
            .and_then(|()| std::io::stderr().flush())
            .map_err(|e| SinkError::WriteFailed(format!("terminal: {e}")))
    }
}

fn severity_badge(severity: Severity, tag: &str) -> String {
    let colored = tag.color(severity.color());
    match severity {
        Severity::Fatal => colored.bold().reversed().to_string(),
        Severity::Error | Severity::Warn => colored.bold().to_string(),
        Severity::Trace | Severity::Debug | Severity::Info | Severity::Notice => {
            colored.to_string()
        }
    }
}

/// Strip ANSI escape sequences and C0/C1 control characters from a string,
/// preserving only printable content, newlines, and tabs.
fn sanitize(s: &str) -> Cow<'_, str> {
    if s.bytes()
        .any(|b| matches!(b, 0x00..=0x08 | 0x0B..=0x0C | 0x0E..=0x1F | 0x7F))
    {
        Cow::Owned(
            s.chars()
                .filter(|&c| !matches!(c as u32, 0x00..=0x08 | 0x0B..=0x0C | 0x0E..=0x1F | 0x7F))
                .collect(),
        )
    } else {
        Cow::Borrowed(s)
    }
}
