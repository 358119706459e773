use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Local;

use crate::domain::ports::sink::{LogSink, SinkError};
use crate::domain::value_objects::severity::Severity;

use super::decorate;

/// Appends every message, whatever its severity, to a persistent log file.
///
/// The file is opened in append mode and never truncated; writes are
/// buffered until [`LogSink::flush`] or drop.
pub struct LogFileSink {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

impl LogFileSink {
    /// Opens (creating if needed) the log file at `path`, expanding a leading `~`.
    ///
    /// # Errors
    ///
    /// Returns `SinkError::Unavailable` if the parent directory cannot be
    /// created or the file cannot be opened for appending.
    pub fn open(path: &str) -> Result<Self, SinkError> {
        let expanded = shellexpand::tilde(path);
        Self::open_path(PathBuf::from(expanded.as_ref()))
    }

    fn open_path(path: PathBuf) -> Result<Self, SinkError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SinkError::Unavailable(format!(
                    "cannot create log directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                SinkError::Unavailable(format!("cannot open log file {}: {e}", path.display()))
            })?;

        Ok(Self {
            path,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn with_writer(
        &self,
        f: impl FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
    ) -> Result<(), SinkError> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| SinkError::Unavailable(format!("log writer lock poisoned: {e}")))?;
        f(&mut writer).map_err(|e| {
            SinkError::WriteFailed(format!("cannot write to {}: {e}", self.path.display()))
        })
    }
}

impl LogSink for LogFileSink {
    fn emit(&self, severity: Severity, message: &str) -> Result<(), SinkError> {
        let line = decorate(&Local::now(), severity, message);
        self.with_writer(|w| writeln!(w, "{line}"))
    }

    fn separator(&self) -> Result<(), SinkError> {
        self.with_writer(|w| writeln!(w))
    }

    fn flush(&self) -> Result<(), SinkError> {
        self.with_writer(Write::flush)
    }
}
