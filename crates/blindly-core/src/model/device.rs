// ── Hub and device entities ──

use serde::Serialize;

use super::codes::{DeviceState, DeviceType, Operation, VoltageMode, WirelessMode};

/// Hub identity from a discovery reply. Immutable once parsed;
/// superseded entirely by the next discovery.
#[derive(Debug, Clone, Serialize)]
pub struct HubInfo {
    pub device_type: DeviceType,
    pub firmware_version: String,
    pub protocol_version: String,
    pub mac: String,
    /// Opaque session token issued by the hub. Never printed.
    #[serde(skip_serializing)]
    pub raw_token: String,
}

/// Minimal per-device record from the discovery reply's device list.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceSummary {
    pub mac: String,
    pub device_type: DeviceType,
}

/// Detailed operational record for one device. Ephemeral — fetched per
/// read request, never cached.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceStatus {
    pub mac: String,
    pub sub_type: u16,
    pub operation: Operation,
    /// Travel position, 0–100.
    pub current_position: u8,
    /// Slat angle, 0–180.
    pub current_angle: u8,
    pub state: DeviceState,
    pub voltage_mode: VoltageMode,
    pub wireless_mode: WirelessMode,
    /// Raw battery reading as reported (volts × 100).
    pub battery_level: u16,
    /// Signal strength in dBm.
    pub signal_strength: i16,
}

impl DeviceStatus {
    /// Battery level as volts (the hub reports volts × 100).
    pub fn battery_volts(&self) -> f32 {
        f32::from(self.battery_level) / 100.0
    }
}
