// UDP request/reply transport
//
// One exchange = one fresh socket, one datagram to the hub's multicast
// group, one bounded wait for the first reply. The socket never outlives
// the call, so every exit path (reply, timeout, error) releases it.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4, UdpSocket};
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::Error;

/// Multicast group the hub listens on.
pub const MULTICAST_GROUP: Ipv4Addr = Ipv4Addr::new(238, 0, 0, 18);

/// UDP port the hub listens on.
pub const MULTICAST_PORT: u16 = 32100;

/// Largest reply the hub is expected to send. Anything bigger is
/// truncated, which the codec surfaces as a malformed reply.
pub const RECV_BUFFER_SIZE: usize = 1024;

/// Default bounded wait for a reply.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Transport configuration.
///
/// The defaults target the protocol's fixed multicast group; tests
/// point `target` at a loopback responder instead.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Destination for request datagrams.
    pub target: SocketAddr,
    /// How long to wait for a reply before giving up.
    pub timeout: Duration,
    /// Receive buffer size per reply.
    pub recv_buffer: usize,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            target: SocketAddr::V4(SocketAddrV4::new(MULTICAST_GROUP, MULTICAST_PORT)),
            timeout: DEFAULT_TIMEOUT,
            recv_buffer: RECV_BUFFER_SIZE,
        }
    }
}

/// Blocking one-shot UDP exchange with the hub.
#[derive(Debug, Clone)]
pub struct Transport {
    config: TransportConfig,
}

impl Transport {
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Access the transport configuration.
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Send `payload` as one datagram and wait for exactly one reply.
    ///
    /// Returns the reply decoded as UTF-8 text. No retries, no
    /// deduplication — if several peers answer, the first datagram wins.
    ///
    /// # Errors
    ///
    /// [`Error::Timeout`] if no reply arrives within the configured wait,
    /// [`Error::Io`] for socket-level failures, [`Error::InvalidUtf8`]
    /// if the reply bytes do not decode.
    pub fn exchange(&self, payload: &[u8]) -> Result<String, Error> {
        let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))?;
        socket.set_read_timeout(Some(self.config.timeout))?;

        socket.send_to(payload, self.config.target)?;
        debug!(target = %self.config.target, len = payload.len(), "request sent");

        let mut buf = vec![0u8; self.config.recv_buffer];
        let (len, peer) = match socket.recv_from(&mut buf) {
            Ok(pair) => pair,
            Err(e) if is_timeout_error(&e) => {
                let timeout_ms = u64::try_from(self.config.timeout.as_millis()).unwrap_or(u64::MAX);
                warn!(target = %self.config.target, timeout_ms, "hub is not responding");
                return Err(Error::Timeout { timeout_ms });
            }
            Err(e) => return Err(Error::Io(e)),
        };

        buf.truncate(len);
        debug!(%peer, len, "reply received");

        Ok(String::from_utf8(buf)?)
    }
}

/// Returns `true` for the OS error kinds a read timeout surfaces as.
fn is_timeout_error(e: &std::io::Error) -> bool {
    matches!(
        e.kind(),
        std::io::ErrorKind::WouldBlock | std::io::ErrorKind::TimedOut
    )
}
