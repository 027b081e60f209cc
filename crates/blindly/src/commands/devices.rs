//! Device command handlers.

use blindly_core::{Bridge, DeviceStatus};

use crate::cli::OutputFormat;
use crate::commands::discover;
use crate::error::CliError;
use crate::output;

/// `blindly devices list` — same data as `discover`, without the summary line.
pub fn list(bridge: &mut Bridge, output: OutputFormat, quiet: bool) -> Result<(), CliError> {
    bridge.discover()?;

    let out = output::render_list(output, bridge.devices(), |d| discover::DeviceRow::from(d), |d| {
        d.mac.clone()
    });
    output::print_output(&out, quiet);
    Ok(())
}

/// `blindly devices status <mac>` — detailed status for one device.
pub fn status(
    bridge: &mut Bridge,
    mac: &str,
    output: OutputFormat,
    quiet: bool,
) -> Result<(), CliError> {
    // Reads need the cached registry for the device-class check.
    bridge.discover()?;
    let status = bridge.read_device(mac)?;

    let out = output::render_single(output, &status, detail, |s| s.mac.clone());
    output::print_output(&out, quiet);
    Ok(())
}

fn detail(s: &DeviceStatus) -> String {
    [
        format!("MAC:        {}", s.mac),
        format!("Sub-type:   {}", s.sub_type),
        format!("Operation:  {}", s.operation.description()),
        format!("Position:   {}%", s.current_position),
        format!("Angle:      {}°", s.current_angle),
        format!("State:      {}", s.state.description()),
        format!("Voltage:    {}", s.voltage_mode.description()),
        format!("Wireless:   {}", s.wireless_mode.description()),
        format!(
            "Battery:    {:.2}V (raw {})",
            s.battery_volts(),
            s.battery_level
        ),
        format!("Signal:     {}dBm", s.signal_strength),
    ]
    .join("\n")
}
