//! Discovery command handlers.

use serde::Serialize;
use tabled::Tabled;

use blindly_core::{Bridge, DeviceSummary, HubInfo};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
pub(crate) struct DeviceRow {
    #[tabled(rename = "MAC")]
    mac: String,
    #[tabled(rename = "Type")]
    type_code: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&DeviceSummary> for DeviceRow {
    fn from(d: &DeviceSummary) -> Self {
        Self {
            mac: d.mac.clone(),
            type_code: d.device_type.code().to_owned(),
            description: d.device_type.description().to_owned(),
        }
    }
}

/// Hub identity plus the authoritative device count, for rendering.
#[derive(Serialize)]
struct HubView {
    mac: String,
    device_type: String,
    firmware_version: String,
    protocol_version: String,
    device_count: usize,
}

impl HubView {
    fn new(hub: &HubInfo, device_count: usize) -> Self {
        Self {
            mac: hub.mac.clone(),
            device_type: hub.device_type.description().to_owned(),
            firmware_version: hub.firmware_version.clone(),
            protocol_version: hub.protocol_version.clone(),
            device_count,
        }
    }

    fn detail(&self) -> String {
        [
            format!("MAC:       {}", self.mac),
            format!("Type:      {}", self.device_type),
            format!("Firmware:  {}", self.firmware_version),
            format!("Protocol:  {}", self.protocol_version),
            format!("Devices:   {}", self.device_count),
        ]
        .join("\n")
    }
}

// ── Handlers ────────────────────────────────────────────────────────

/// `blindly discover` — discovery plus the device list.
pub fn handle(bridge: &mut Bridge, output: OutputFormat, quiet: bool) -> Result<(), CliError> {
    let hub = bridge.discover()?;

    if !quiet {
        eprintln!(
            "Hub {} (firmware {}, {} device(s))",
            hub.mac,
            hub.firmware_version,
            bridge.devices().len()
        );
    }

    let out = output::render_list(output, bridge.devices(), |d| DeviceRow::from(d), |d| d.mac.clone());
    output::print_output(&out, quiet);
    Ok(())
}

/// `blindly hub` — hub identity only.
pub fn handle_hub(bridge: &mut Bridge, output: OutputFormat, quiet: bool) -> Result<(), CliError> {
    let hub = bridge.discover()?;
    let view = HubView::new(&hub, bridge.devices().len());

    let out = output::render_single(output, &view, HubView::detail, |v| v.mac.clone());
    output::print_output(&out, quiet);
    Ok(())
}
