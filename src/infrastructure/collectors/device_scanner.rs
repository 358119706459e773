use std::path::PathBuf;

use regex::Regex;

use crate::domain::ports::diagnostics::{DeviceSource, ScanError};

/// Enumerates block device nodes named `<prefix>` plus one or two lowercase
/// letters (`sda`, `sdz`, `sdaa`, ...), or checks an explicit device list.
pub struct DeviceScanner {
    root: PathBuf,
    pattern: Regex,
    explicit: Vec<PathBuf>,
}

impl DeviceScanner {
    /// # Errors
    ///
    /// Returns `ScanError::EnumerationFailed` if `prefix` does not form a valid pattern.
    pub fn new(root: impl Into<PathBuf>, prefix: &str) -> Result<Self, ScanError> {
        let pattern = Regex::new(&format!("^{}[a-z]{{1,2}}$", regex::escape(prefix)))
            .map_err(|e| ScanError::EnumerationFailed(format!("invalid device prefix: {e}")))?;
        Ok(Self {
            root: root.into(),
            pattern,
            explicit: Vec::new(),
        })
    }

    /// Use the given paths instead of enumerating the device root.
    #[must_use]
    pub fn with_devices(mut self, devices: Vec<PathBuf>) -> Self {
        self.explicit = devices;
        self
    }

    /// Candidate identifiers in enumeration order, before the existence check.
    ///
    /// # Errors
    ///
    /// Returns `ScanError::EnumerationFailed` if the device root cannot be read.
    pub fn candidates(&self) -> Result<Vec<PathBuf>, ScanError> {
        if !self.explicit.is_empty() {
            return Ok(self.explicit.clone());
        }

        let entries = std::fs::read_dir(&self.root).map_err(|e| {
            ScanError::EnumerationFailed(format!("failed to read {}: {e}", self.root.display()))
        })?;

        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .filter_map(|e| e.file_name().into_string().ok())
            .filter(|name| self.pattern.is_match(name))
            .collect();
        // sda..sdz before sdaa..sdzz, the order the kernel assigns them
        names.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

        Ok(names.into_iter().map(|n| self.root.join(n)).collect())
    }
}

impl DeviceSource for DeviceScanner {
    fn devices(&self) -> Result<Vec<PathBuf>, ScanError> {
        Ok(self
            .candidates()?
            .into_iter()
            .filter(|path| {
                let exists = path.exists();
                if !exists {
                    tracing::debug!("skipping {}: no such device", path.display());
                }
                exists
            })
            .collect())
    }
}
