use thiserror::Error;

/// Top-level error type for the `blindly-api` crate.
///
/// Covers the transport and codec failure modes; `blindly-core` maps
/// these into domain-appropriate variants.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// No reply arrived within the configured wait.
    #[error("No reply from hub within {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// Socket-level error (bind, send, receive).
    #[error("UDP transport error: {0}")]
    Io(#[from] std::io::Error),

    /// The reply datagram was not valid UTF-8.
    #[error("Reply is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    // ── Codec ───────────────────────────────────────────────────────
    /// The reply JSON is missing fields required for the requested
    /// message kind, or is not JSON at all (e.g. a truncated datagram).
    #[error("Malformed reply: {reason}")]
    MalformedReply { reason: String },
}

impl Error {
    /// Wrap a serde failure as a [`MalformedReply`](Self::MalformedReply).
    pub fn malformed(err: &serde_json::Error) -> Self {
        Self::MalformedReply {
            reason: err.to_string(),
        }
    }

    /// Returns `true` if this error is a receive timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
