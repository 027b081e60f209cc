// Integration tests for `Bridge` against a scripted loopback hub.
//
// The fake hub is a UDP socket on 127.0.0.1 that answers each request
// with the next canned reply and forwards every request payload back to
// the test for inspection.

use std::net::{SocketAddr, UdpSocket};
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::Duration;

use secrecy::SecretString;
use serde_json::Value;

use blindly_api::TransportConfig;
use blindly_core::{Bridge, BridgeConfig, Command, CoreError, DeviceType, SessionState};

const FACTORY_KEY: &str = "74ae544c-d16e-4c";
const MOTOR_MAC: &str = "3c71bf6cf5b8000c";
const RECEIVER_MAC: &str = "a1b2c3d4e5f60001";

const DISCOVERY_REPLY: &str = r#"{
    "msgType": "GetDeviceListAck",
    "token": "0123456789abcdef",
    "deviceType": "02000001",
    "fwVersion": "1.2",
    "ProtocolVersion": "1",
    "mac": "AA:BB",
    "data": [
        {"deviceType": "10000000", "mac": "3c71bf6cf5b8000c"},
        {"deviceType": "22000005", "mac": "a1b2c3d4e5f60001"}
    ]
}"#;

const READ_REPLY: &str = r#"{
    "msgType": "ReadDeviceAck",
    "mac": "3c71bf6cf5b8000c",
    "data": {
        "type": 1, "operation": 1, "currentPosition": 40,
        "currentAngle": 0, "currentState": 3, "voltageMode": 1,
        "batteryLevel": 1172, "wirelessMode": 1, "RSSI": -55
    }
}"#;

const WRITE_ACK: &str = r#"{"msgType": "WriteDeviceAck", "actionResult": "AS"}"#;

/// Spawn a scripted hub. Answers one request per canned reply, sending
/// each received payload down the channel first.
fn fake_hub(replies: Vec<String>) -> (SocketAddr, mpsc::Receiver<String>, JoinHandle<()>) {
    let socket = UdpSocket::bind("127.0.0.1:0").expect("bind fake hub");
    let addr = socket.local_addr().expect("local addr");
    socket
        .set_read_timeout(Some(Duration::from_secs(5)))
        .expect("set timeout");

    let (tx, rx) = mpsc::channel();
    let handle = std::thread::spawn(move || {
        let mut buf = [0u8; 2048];
        for reply in replies {
            let Ok((len, peer)) = socket.recv_from(&mut buf) else {
                break;
            };
            let request = String::from_utf8_lossy(&buf[..len]).into_owned();
            let _ = tx.send(request);
            socket.send_to(reply.as_bytes(), peer).expect("send reply");
        }
    });

    (addr, rx, handle)
}

fn bridge_for(addr: SocketAddr) -> Bridge {
    Bridge::new(BridgeConfig {
        key: SecretString::from(FACTORY_KEY),
        transport: TransportConfig {
            target: addr,
            timeout: Duration::from_secs(1),
            ..TransportConfig::default()
        },
    })
}

// ── Discovery ───────────────────────────────────────────────────────

#[test]
fn discovery_parses_hub_and_caches_the_device_list() {
    let (addr, _rx, handle) = fake_hub(vec![DISCOVERY_REPLY.into()]);
    let mut bridge = bridge_for(addr);

    assert_eq!(bridge.session_state(), SessionState::NoToken);

    let hub = bridge.discover().expect("discovery succeeds");
    assert_eq!(hub.device_type.description(), "Wi-Fi Bridge");
    assert_eq!(hub.firmware_version, "1.2");
    assert_eq!(hub.raw_token, "0123456789abcdef");

    assert_eq!(bridge.devices().len(), 2);
    assert_eq!(
        bridge.device(MOTOR_MAC).map(|d| &d.device_type),
        Some(&DeviceType::RadioMotor)
    );
    assert_eq!(bridge.session_state(), SessionState::RawTokenAcquired);

    handle.join().expect("hub thread");
}

#[test]
fn discovery_timeout_is_reported_not_hung() {
    // A hub that never answers.
    let socket = UdpSocket::bind("127.0.0.1:0").expect("bind silent hub");
    let addr = socket.local_addr().expect("local addr");

    let mut bridge = Bridge::new(BridgeConfig {
        key: SecretString::from(FACTORY_KEY),
        transport: TransportConfig {
            target: addr,
            timeout: Duration::from_millis(200),
            ..TransportConfig::default()
        },
    });

    let err = bridge.discover().expect_err("must time out");
    assert!(matches!(err, CoreError::Timeout { timeout_ms: 200 }));
    assert_eq!(bridge.session_state(), SessionState::NoToken);
}

// ── Authorization ───────────────────────────────────────────────────

#[test]
fn command_before_token_refresh_is_not_authorized() {
    let (addr, _rx, handle) = fake_hub(vec![DISCOVERY_REPLY.into()]);
    let mut bridge = bridge_for(addr);
    bridge.discover().expect("discovery succeeds");

    let err = bridge
        .send_command(MOTOR_MAC, Command::open())
        .expect_err("no access token yet");
    assert!(matches!(err, CoreError::NotAuthorized));

    handle.join().expect("hub thread");
}

#[test]
fn connect_discovers_and_derives_the_access_token() {
    let (addr, _rx, handle) = fake_hub(vec![DISCOVERY_REPLY.into()]);
    let mut bridge = bridge_for(addr);

    bridge.connect().expect("connect succeeds");
    assert_eq!(bridge.session_state(), SessionState::AccessTokenDerived);

    handle.join().expect("hub thread");
}

// ── Write commands ──────────────────────────────────────────────────

#[test]
fn open_command_builds_the_documented_envelope() {
    let (addr, rx, handle) = fake_hub(vec![DISCOVERY_REPLY.into(), WRITE_ACK.into()]);
    let mut bridge = bridge_for(addr);
    bridge.connect().expect("connect succeeds");

    let ack = bridge
        .send_command(MOTOR_MAC, Command::open())
        .expect("command succeeds");
    assert_eq!(ack["msgType"], "WriteDeviceAck");

    let _discovery_request = rx.recv().expect("discovery request");
    let write_request: Value =
        serde_json::from_str(&rx.recv().expect("write request")).expect("valid JSON");

    assert_eq!(write_request["msgType"], "WriteDevice");
    assert_eq!(write_request["mac"], MOTOR_MAC);
    assert_eq!(write_request["deviceType"], "10000000");
    assert_eq!(write_request["data"]["operation"], 1);
    assert!(write_request["data"].get("value").is_none());

    let token = write_request["AccessToken"].as_str().expect("token string");
    assert_eq!(token.len(), 32);
    assert!(token.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_uppercase()));

    handle.join().expect("hub thread");
}

#[test]
fn positional_command_carries_the_value_field() {
    let (addr, rx, handle) = fake_hub(vec![DISCOVERY_REPLY.into(), WRITE_ACK.into()]);
    let mut bridge = bridge_for(addr);
    bridge.connect().expect("connect succeeds");

    bridge
        .send_command(MOTOR_MAC, Command::open().with_position(40))
        .expect("command succeeds");

    let _discovery_request = rx.recv().expect("discovery request");
    let write_request: Value =
        serde_json::from_str(&rx.recv().expect("write request")).expect("valid JSON");
    assert_eq!(write_request["data"]["operation"], 1);
    assert_eq!(write_request["data"]["value"], 40);

    handle.join().expect("hub thread");
}

#[test]
fn out_of_range_position_is_rejected_before_sending() {
    let (addr, _rx, handle) = fake_hub(vec![DISCOVERY_REPLY.into()]);
    let mut bridge = bridge_for(addr);
    bridge.connect().expect("connect succeeds");

    let err = bridge
        .send_command(MOTOR_MAC, Command::open().with_position(150))
        .expect_err("150 > 100");
    assert!(matches!(err, CoreError::ValidationFailed { .. }));

    handle.join().expect("hub thread");
}

// ── Device reads ────────────────────────────────────────────────────

#[test]
fn read_device_returns_the_detailed_status() {
    let (addr, _rx, handle) = fake_hub(vec![DISCOVERY_REPLY.into(), READ_REPLY.into()]);
    let mut bridge = bridge_for(addr);
    bridge.discover().expect("discovery succeeds");

    let status = bridge.read_device(MOTOR_MAC).expect("read succeeds");
    assert_eq!(status.mac, MOTOR_MAC);
    assert_eq!(status.current_position, 40);
    assert_eq!(status.battery_level, 1172);
    assert_eq!(status.signal_strength, -55);

    handle.join().expect("hub thread");
}

#[test]
fn read_of_unknown_mac_is_device_not_found() {
    let (addr, _rx, handle) = fake_hub(vec![DISCOVERY_REPLY.into()]);
    let mut bridge = bridge_for(addr);
    bridge.discover().expect("discovery succeeds");

    let err = bridge
        .read_device("0000000000000000")
        .expect_err("not in the device list");
    assert!(matches!(err, CoreError::DeviceNotFound { .. }));

    handle.join().expect("hub thread");
}

#[test]
fn read_of_a_receiver_is_unsupported_device() {
    let (addr, _rx, handle) = fake_hub(vec![DISCOVERY_REPLY.into()]);
    let mut bridge = bridge_for(addr);
    bridge.discover().expect("discovery succeeds");

    // Fails fast without a network exchange — the hub has no reply
    // scripted for it, so a send would have timed out instead.
    let err = bridge
        .read_device(RECEIVER_MAC)
        .expect_err("receivers are not controllable");
    assert!(matches!(err, CoreError::UnsupportedDevice { .. }));

    handle.join().expect("hub thread");
}
