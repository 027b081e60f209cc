// ── Bridge client ──
//
// Full lifecycle for one hub session: discovery, access-token refresh,
// device reads, and authorized write commands. Fully synchronous — each
// call is one UDP exchange with a bounded wait, and the instance holds
// mutable session state with no internal locking. Independent Bridge
// instances (own key, own session) do not share anything.

use secrecy::SecretString;
use serde_json::Value;
use tracing::{debug, info};

use blindly_api::transport::{Transport, TransportConfig};
use blindly_api::{Request, protocol};

use crate::command::Command;
use crate::error::CoreError;
use crate::model::{DeviceStatus, DeviceSummary, HubInfo};
use crate::session::{Session, SessionState};

/// Bridge client configuration.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Factory key from the Connector app (Settings → About, tap 4×).
    pub key: SecretString,
    /// Transport settings; defaults target the protocol's multicast group.
    pub transport: TransportConfig,
}

impl BridgeConfig {
    pub fn new(key: SecretString) -> Self {
        Self {
            key,
            transport: TransportConfig::default(),
        }
    }
}

/// The main entry point for consumers.
///
/// Owns the transport, the session state machine, and the device list
/// cached from the last discovery. State transitions are explicit:
/// [`discover`](Self::discover) acquires the raw token,
/// [`refresh_access_token`](Self::refresh_access_token) derives the
/// credential write commands require.
#[derive(Debug)]
pub struct Bridge {
    config: BridgeConfig,
    transport: Transport,
    session: Session,
    hub: Option<HubInfo>,
    devices: Vec<DeviceSummary>,
}

impl Bridge {
    /// Create a new Bridge. Does not touch the network — call
    /// [`discover`](Self::discover) or [`connect`](Self::connect).
    pub fn new(config: BridgeConfig) -> Self {
        let transport = Transport::new(config.transport.clone());
        Self {
            config,
            transport,
            session: Session::new(),
            hub: None,
            devices: Vec::new(),
        }
    }

    // ── Accessors ────────────────────────────────────────────────

    /// Hub identity from the last discovery, if any.
    pub fn hub(&self) -> Option<&HubInfo> {
        self.hub.as_ref()
    }

    /// Device summaries cached from the last discovery.
    pub fn devices(&self) -> &[DeviceSummary] {
        &self.devices
    }

    /// Look up a cached device summary by mac.
    pub fn device(&self, mac: &str) -> Option<&DeviceSummary> {
        self.devices.iter().find(|d| d.mac == mac)
    }

    /// Current session state.
    pub fn session_state(&self) -> SessionState {
        self.session.state()
    }

    // ── Lifecycle ────────────────────────────────────────────────

    /// Discover the hub and enumerate attached devices.
    ///
    /// Replaces the cached hub info and device list, and feeds the
    /// reply's session token into the session state machine — any
    /// previously derived access token is invalidated.
    pub fn discover(&mut self) -> Result<HubInfo, CoreError> {
        let raw = self
            .transport
            .exchange(Request::GetDeviceList.encode().as_bytes())?;
        let reply = protocol::parse_device_list(&raw)?;

        self.session.acquire_raw_token(reply.token.clone());
        self.devices = reply.data.iter().map(DeviceSummary::from).collect();

        let hub = HubInfo::from(&reply);
        info!(
            hub = %hub.mac,
            firmware = %hub.firmware_version,
            devices = self.devices.len(),
            "discovery complete"
        );
        self.hub = Some(hub.clone());
        Ok(hub)
    }

    /// Derive the access token for the current session from the
    /// configured factory key.
    pub fn refresh_access_token(&mut self) -> Result<(), CoreError> {
        self.session.refresh_access_token(&self.config.key)?;
        Ok(())
    }

    /// Convenience: discover, then refresh the access token.
    pub fn connect(&mut self) -> Result<HubInfo, CoreError> {
        let hub = self.discover()?;
        self.refresh_access_token()?;
        Ok(hub)
    }

    // ── Device operations ────────────────────────────────────────

    /// Fetch detailed status for one device.
    ///
    /// The target must appear in the cached device list and be of the
    /// bidirectional radio-motor class — the hub silently misbehaves on
    /// requests for other classes, so we fail fast instead of sending.
    pub fn read_device(&self, mac: &str) -> Result<DeviceStatus, CoreError> {
        self.ensure_controllable(mac)?;

        let request = Request::ReadDevice { mac: mac.into() };
        let raw = self.transport.exchange(request.encode().as_bytes())?;
        let reply = protocol::parse_read_reply(&raw)?;

        let mac = reply.mac.clone().unwrap_or_else(|| mac.to_owned());
        debug!(%mac, "device status read");
        Ok(DeviceStatus::from_wire(mac, &reply.data))
    }

    /// Issue an authorized write command to one device.
    ///
    /// Requires a derived access token. Returns the hub's raw JSON
    /// acknowledgement — the reply's success/failure semantics are
    /// unconfirmed, so nothing is interpreted.
    pub fn send_command(&self, mac: &str, command: Command) -> Result<Value, CoreError> {
        let access_token = self
            .session
            .access_token()
            .ok_or(CoreError::NotAuthorized)?;
        command.validate()?;
        self.ensure_controllable(mac)?;

        let request = Request::WriteDevice {
            access_token: access_token.to_owned(),
            mac: mac.into(),
            operation: command.operation.code(),
            value: command.value,
        };
        let raw = self.transport.exchange(request.encode().as_bytes())?;
        let reply = protocol::parse_write_reply(&raw)?;

        info!(%mac, operation = command.operation.description(), "command sent");
        Ok(reply)
    }

    // ── Helpers ──────────────────────────────────────────────────

    /// Fail fast unless `mac` is a known bidirectional motor.
    fn ensure_controllable(&self, mac: &str) -> Result<(), CoreError> {
        let summary = self.device(mac).ok_or_else(|| CoreError::DeviceNotFound {
            mac: mac.to_owned(),
        })?;

        if summary.device_type.is_controllable() {
            Ok(())
        } else {
            Err(CoreError::UnsupportedDevice {
                mac: mac.to_owned(),
                description: summary.device_type.description().to_owned(),
            })
        }
    }
}
