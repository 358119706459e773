use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::value_objects::verbosity::Verbosity;

/// Top-level application configuration loaded from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Terminal verbosity, colors and the persistent log destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub trace: bool,
    #[serde(default)]
    pub debug: bool,
    #[serde(default)]
    pub verbose: bool,
    #[serde(default = "default_true")]
    pub color: bool,
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

/// Where devices are found and how they are queried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default = "default_smartctl")]
    pub smartctl: String,
    #[serde(default = "default_device_root")]
    pub device_root: String,
    #[serde(default = "default_device_prefix")]
    pub device_prefix: String,
    /// Explicit device list; replaces enumeration when non-empty.
    #[serde(default)]
    pub devices: Vec<String>,
    /// Parent of the per-run scratch directory; system temp dir when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scratch_dir: Option<String>,
}

/// Command-line and environment settings layered over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub trace: bool,
    pub debug: bool,
    pub verbose: bool,
    pub no_color: bool,
    pub log_file: Option<String>,
    pub devices: Vec<String>,
}

// --- Defaults ---

const fn default_true() -> bool {
    true
}

// Stored with tilde; expanded by the log sink.
fn default_log_file() -> String {
    "~/.local/share/smartlog/smartlog.log".into()
}

fn default_smartctl() -> String {
    "smartctl".into()
}

fn default_device_root() -> String {
    "/dev".into()
}

fn default_device_prefix() -> String {
    "sd".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            trace: false,
            debug: false,
            verbose: false,
            color: default_true(),
            log_file: default_log_file(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            smartctl: default_smartctl(),
            device_root: default_device_root(),
            device_prefix: default_device_prefix(),
            devices: Vec::new(),
            scratch_dir: None,
        }
    }
}

impl LoggingConfig {
    #[must_use]
    pub const fn verbosity(&self) -> Verbosity {
        Verbosity::new(self.trace, self.debug, self.verbose)
    }
}

// --- AppConfig methods ---

impl AppConfig {
    /// Load from a specific path, or use defaults if the file does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            tracing::debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML content is invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Save config to a specific path, creating parent directories if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created,
    /// serialization fails, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        let content = self.to_toml()?;
        std::fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }

    /// Render the effective configuration as TOML
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Default location: `<config dir>/smartlog/config.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if the platform config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("smartlog").join("config.toml"))
    }

    /// Layer command-line settings over the file. Flags can only enable
    /// verbosity; an absent flag leaves the configured value.
    pub fn apply(&mut self, overrides: &Overrides) {
        self.logging.trace |= overrides.trace;
        self.logging.debug |= overrides.debug;
        self.logging.verbose |= overrides.verbose;
        if overrides.no_color {
            self.logging.color = false;
        }
        if let Some(ref log_file) = overrides.log_file {
            self.logging.log_file.clone_from(log_file);
        }
        if !overrides.devices.is_empty() {
            self.scan.devices.clone_from(&overrides.devices);
        }
    }
}
