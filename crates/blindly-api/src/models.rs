// Wire-level reply models
//
// Field names mirror the hub's JSON exactly (mixed camelCase and
// inconsistent capitalisation are the hub's, not ours). Unknown fields
// are retained opaquely in `extra` — parsing is permissive, and only
// the fields required for the requested message kind are mandatory.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Reply to a `GetDeviceList` request: hub identity plus the attached
/// device list. The list length is the authoritative device count.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceListReply {
    #[serde(rename = "deviceType")]
    pub device_type: String,
    #[serde(rename = "fwVersion")]
    pub fw_version: String,
    #[serde(rename = "ProtocolVersion")]
    pub protocol_version: String,
    pub mac: String,
    /// Opaque session token; consumed by the session state machine.
    pub token: String,
    pub data: Vec<DeviceSummaryWire>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entry of the discovery reply's device list.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceSummaryWire {
    #[serde(rename = "deviceType")]
    pub device_type: String,
    pub mac: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Reply to a `ReadDevice` request for one device.
#[derive(Debug, Clone, Deserialize)]
pub struct ReadDeviceReply {
    /// Some hub firmwares echo the target mac, some omit it.
    #[serde(default)]
    pub mac: Option<String>,
    pub data: DeviceStatusWire,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Detailed status record inside a `ReadDevice` reply.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceStatusWire {
    #[serde(rename = "type")]
    pub sub_type: u16,
    pub operation: u8,
    #[serde(rename = "currentPosition")]
    pub current_position: u8,
    #[serde(rename = "currentAngle")]
    pub current_angle: u8,
    #[serde(rename = "currentState")]
    pub current_state: u8,
    #[serde(rename = "voltageMode")]
    pub voltage_mode: u8,
    #[serde(rename = "batteryLevel")]
    pub battery_level: u16,
    #[serde(rename = "wirelessMode")]
    pub wireless_mode: u8,
    #[serde(rename = "RSSI")]
    pub rssi: i16,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
