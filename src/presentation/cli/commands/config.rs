use std::io::Write;
use std::path::Path;

use anyhow::bail;

use crate::application::config::AppConfig;

/// Prints the effective configuration as TOML.
///
/// # Errors
///
/// Returns an error if serialization fails or `out` cannot be written.
pub fn run_config_show(config: &AppConfig, out: &mut dyn Write) -> anyhow::Result<()> {
    write!(out, "{}", config.to_toml()?)?;
    Ok(())
}

/// Writes the default configuration to `path`. Refuses to overwrite.
///
/// # Errors
///
/// Returns an error if a file already exists at `path` or it cannot be written.
pub fn run_config_init(path: &Path, out: &mut dyn Write) -> anyhow::Result<()> {
    if path.exists() {
        bail!("config file already exists: {}", path.display());
    }
    AppConfig::default().save_to(path)?;
    writeln!(out, "wrote default config to {}", path.display())?;
    Ok(())
}
