// JSON envelope codec
//
// Every request is a JSON object with `msgType`, `msgID`, and the
// kind-specific fields. Replies are parsed permissively into the wire
// models; anything the hub adds beyond the required fields survives in
// the model's `extra` map.

use chrono::Local;
use serde_json::{Value, json};

use crate::error::Error;
use crate::models::{DeviceListReply, ReadDeviceReply};

/// Protocol constant for the "433 MHz bidirectional radio motor" device
/// class. Device-specific requests always carry this constant; the hub
/// rejects other classes.
pub const DEVICE_TYPE_RADIO_MOTOR: &str = "10000000";

/// A request envelope to the hub, one variant per message kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Discover the hub and enumerate attached devices.
    GetDeviceList,
    /// Fetch detailed status for one device.
    ReadDevice { mac: String },
    /// Issue an authorized command to one device.
    WriteDevice {
        access_token: String,
        mac: String,
        operation: u8,
        value: Option<u8>,
    },
}

impl Request {
    /// Serialize this request to its JSON envelope, stamped with a
    /// fresh [`msg_id`].
    pub fn encode(&self) -> String {
        self.encode_with_id(&msg_id())
    }

    /// Serialize with an explicit `msgID` (tests pin the timestamp).
    pub fn encode_with_id(&self, msg_id: &str) -> String {
        let envelope = match self {
            Self::GetDeviceList => json!({
                "msgType": "GetDeviceList",
                "msgID": msg_id,
            }),
            Self::ReadDevice { mac } => json!({
                "msgType": "ReadDevice",
                "msgID": msg_id,
                "deviceType": DEVICE_TYPE_RADIO_MOTOR,
                "mac": mac,
            }),
            Self::WriteDevice {
                access_token,
                mac,
                operation,
                value,
            } => {
                let data = match value {
                    Some(v) => json!({ "operation": operation, "value": v }),
                    None => json!({ "operation": operation }),
                };
                json!({
                    "msgType": "WriteDevice",
                    "msgID": msg_id,
                    "AccessToken": access_token,
                    "deviceType": DEVICE_TYPE_RADIO_MOTOR,
                    "mac": mac,
                    "data": data,
                })
            }
        };
        envelope.to_string()
    }
}

/// Current local time as the protocol's 14-digit `YYYYMMDDHHMMSS` id.
///
/// One-second resolution: two requests issued within the same second
/// produce identical ids. The protocol does not defend against this.
pub fn msg_id() -> String {
    Local::now().format("%Y%m%d%H%M%S").to_string()
}

// ── Reply parsing ───────────────────────────────────────────────────

/// Parse a `GetDeviceList` reply.
pub fn parse_device_list(raw: &str) -> Result<DeviceListReply, Error> {
    serde_json::from_str(raw).map_err(|e| Error::malformed(&e))
}

/// Parse a `ReadDevice` reply.
pub fn parse_read_reply(raw: &str) -> Result<ReadDeviceReply, Error> {
    serde_json::from_str(raw).map_err(|e| Error::malformed(&e))
}

/// Parse a `WriteDevice` acknowledgement.
///
/// Returned as an opaque value: whether the hub's reply carries a
/// success/failure indicator is unconfirmed, so callers get the raw
/// JSON and nothing is interpreted.
pub fn parse_write_reply(raw: &str) -> Result<Value, Error> {
    serde_json::from_str(raw).map_err(|e| Error::malformed(&e))
}
