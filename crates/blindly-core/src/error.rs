// ── Core error types ──
//
// User-facing errors from blindly-core. Consumers never see raw socket
// or serde failures directly; the `From<blindly_api::Error>` impl
// translates transport/codec errors into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Transport errors ─────────────────────────────────────────────
    #[error("Hub did not reply within {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Cannot reach hub: {reason}")]
    ConnectionFailed { reason: String },

    #[error("Malformed reply from hub: {reason}")]
    MalformedReply { reason: String },

    // ── Session errors ───────────────────────────────────────────────
    /// Token refresh attempted before any successful discovery.
    #[error("No session token -- run discovery first")]
    MissingToken,

    /// Write command attempted before the access token was derived.
    #[error("Not authorized -- refresh the access token first")]
    NotAuthorized,

    /// Key or token length does not match the cipher block/key size.
    #[error("Crypto error: {what} must be exactly {expected} bytes, got {got}")]
    Crypto {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    // ── Device errors ────────────────────────────────────────────────
    #[error("Device not found: {mac}")]
    DeviceNotFound { mac: String },

    /// Target device is not of the bidirectional radio-motor class the
    /// protocol's read/write messages support.
    #[error("Device {mac} is a {description} -- not a controllable motor")]
    UnsupportedDevice { mac: String, description: String },

    // ── Validation errors ────────────────────────────────────────────
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },
}

// ── Conversion from wire-layer errors ────────────────────────────────

impl From<blindly_api::Error> for CoreError {
    fn from(err: blindly_api::Error) -> Self {
        match err {
            blindly_api::Error::Timeout { timeout_ms } => Self::Timeout { timeout_ms },
            blindly_api::Error::Io(e) => Self::ConnectionFailed {
                reason: e.to_string(),
            },
            blindly_api::Error::InvalidUtf8(e) => Self::ConnectionFailed {
                reason: format!("reply is not UTF-8: {e}"),
            },
            blindly_api::Error::MalformedReply { reason } => Self::MalformedReply { reason },
        }
    }
}
