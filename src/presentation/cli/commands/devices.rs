use std::io::Write;

use colored::Colorize;

use crate::domain::ports::diagnostics::DeviceSource;

/// Lists the devices a scan would query, one path per line.
///
/// # Errors
///
/// Returns an error if the devices cannot be enumerated or `out` cannot be written.
pub fn run_devices(source: &dyn DeviceSource, out: &mut dyn Write) -> anyhow::Result<()> {
    let devices = source.devices()?;

    if devices.is_empty() {
        writeln!(out, "{}", "no devices found".yellow())?;
        return Ok(());
    }

    for device in &devices {
        writeln!(out, "{}", device.display())?;
    }
    Ok(())
}
