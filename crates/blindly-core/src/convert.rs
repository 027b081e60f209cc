// ── Wire → domain conversions ──

use blindly_api::models::{DeviceListReply, DeviceStatusWire, DeviceSummaryWire};

use crate::model::{
    DeviceState, DeviceStatus, DeviceSummary, DeviceType, HubInfo, Operation, VoltageMode,
    WirelessMode,
};

impl From<&DeviceListReply> for HubInfo {
    fn from(reply: &DeviceListReply) -> Self {
        Self {
            device_type: DeviceType::from_code(&reply.device_type),
            firmware_version: reply.fw_version.clone(),
            protocol_version: reply.protocol_version.clone(),
            mac: reply.mac.clone(),
            raw_token: reply.token.clone(),
        }
    }
}

impl From<&DeviceSummaryWire> for DeviceSummary {
    fn from(wire: &DeviceSummaryWire) -> Self {
        Self {
            mac: wire.mac.clone(),
            device_type: DeviceType::from_code(&wire.device_type),
        }
    }
}

impl DeviceStatus {
    /// Build a status record from the wire data plus the mac it was
    /// requested for (some firmwares omit the mac in the reply).
    pub fn from_wire(mac: String, wire: &DeviceStatusWire) -> Self {
        Self {
            mac,
            sub_type: wire.sub_type,
            operation: Operation::from_code(wire.operation),
            current_position: wire.current_position,
            current_angle: wire.current_angle,
            state: DeviceState::from_code(wire.current_state),
            voltage_mode: VoltageMode::from_code(wire.voltage_mode),
            wireless_mode: WirelessMode::from_code(wire.wireless_mode),
            battery_level: wire.battery_level,
            signal_strength: wire.rssi,
        }
    }
}

#[cfg(test)]
mod tests {
    use blindly_api::protocol;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn discovery_reply_converts_to_hub_info_and_summaries() {
        let raw = r#"{
            "token": "0123456789abcdef",
            "deviceType": "02000001",
            "fwVersion": "1.2",
            "ProtocolVersion": "1",
            "mac": "AA:BB",
            "data": [{"deviceType": "10000000", "mac": "3c71bf6cf5b8000c"}]
        }"#;
        let reply = protocol::parse_device_list(raw).expect("parses");

        let hub = HubInfo::from(&reply);
        assert_eq!(hub.device_type.description(), "Wi-Fi Bridge");
        assert_eq!(hub.firmware_version, "1.2");
        assert_eq!(hub.raw_token, "0123456789abcdef");

        let devices: Vec<DeviceSummary> = reply.data.iter().map(DeviceSummary::from).collect();
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].mac, "3c71bf6cf5b8000c");
        assert_eq!(devices[0].device_type, DeviceType::RadioMotor);
    }

    #[test]
    fn status_wire_converts_with_code_tables_applied() {
        let raw = r#"{
            "mac": "3c71bf6cf5b8000c",
            "data": {
                "type": 1, "operation": 2, "currentPosition": 75,
                "currentAngle": 90, "currentState": 3, "voltageMode": 1,
                "batteryLevel": 1172, "wirelessMode": 1, "RSSI": -67
            }
        }"#;
        let reply = protocol::parse_read_reply(raw).expect("parses");
        let status = DeviceStatus::from_wire("3c71bf6cf5b8000c".into(), &reply.data);

        assert_eq!(status.operation, Operation::Stop);
        assert_eq!(status.state, DeviceState::BothLimits);
        assert_eq!(status.voltage_mode, VoltageMode::Dc);
        assert_eq!(status.wireless_mode, WirelessMode::BiDirection);
        assert_eq!(status.signal_strength, -67);
        assert!((status.battery_volts() - 11.72).abs() < 0.001);
    }
}
