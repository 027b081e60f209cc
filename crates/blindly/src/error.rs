//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors
//! with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use blindly_config::ConfigError;
use blindly_core::CoreError;

/// Exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const UNSUPPORTED: i32 = 5;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Hub did not reply within {timeout_ms}ms")]
    #[diagnostic(
        code(blindly::timeout),
        help(
            "Check that the hub is powered and on this LAN.\n\
             Multicast may be filtered across subnets -- try --hub-addr <ip>:32100."
        )
    )]
    Timeout { timeout_ms: u64 },

    #[error("Cannot reach hub: {reason}")]
    #[diagnostic(code(blindly::connection_failed))]
    ConnectionFailed { reason: String },

    #[error("Malformed reply from hub: {reason}")]
    #[diagnostic(
        code(blindly::malformed_reply),
        help("Another device may be answering on the multicast group, or the reply was truncated.")
    )]
    MalformedReply { reason: String },

    // ── Authorization ────────────────────────────────────────────────
    #[error("No factory key configured")]
    #[diagnostic(
        code(blindly::no_key),
        help(
            "Find the key in the Connector app: Settings > About, tap the version 4 times.\n\
             Then run: blindly config init --key <KEY>\n\
             Or set the BLINDLY_KEY environment variable."
        )
    )]
    NoKey,

    #[error("Not authorized: no access token for this session")]
    #[diagnostic(
        code(blindly::not_authorized),
        help("Re-run discovery and token refresh before sending commands.")
    )]
    NotAuthorized,

    #[error("Crypto error: {what} must be exactly {expected} bytes, got {got}")]
    #[diagnostic(
        code(blindly::crypto),
        help("The factory key and the hub's session token must each be 16 bytes.")
    )]
    Crypto {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    // ── Devices ──────────────────────────────────────────────────────
    #[error("Device '{mac}' not found")]
    #[diagnostic(
        code(blindly::not_found),
        help("Run: blindly devices list to see discovered devices")
    )]
    DeviceNotFound { mac: String },

    #[error("Device '{mac}' is a {description} -- not a controllable motor")]
    #[diagnostic(
        code(blindly::unsupported_device),
        help("Only 433 MHz bidirectional motors accept read/write commands.")
    )]
    UnsupportedDevice { mac: String, description: String },

    // ── Validation / configuration ───────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(blindly::validation))]
    Validation { field: String, reason: String },

    #[error("No session token -- discovery has not run")]
    #[diagnostic(code(blindly::missing_token))]
    MissingToken,

    #[error(transparent)]
    #[diagnostic(code(blindly::config))]
    Config(#[from] ConfigError),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } | Self::MalformedReply { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::NoKey | Self::NotAuthorized | Self::Crypto { .. } | Self::MissingToken => {
                exit_code::AUTH
            }
            Self::DeviceNotFound { .. } => exit_code::NOT_FOUND,
            Self::UnsupportedDevice { .. } => exit_code::UNSUPPORTED,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Timeout { timeout_ms } => Self::Timeout { timeout_ms },
            CoreError::ConnectionFailed { reason } => Self::ConnectionFailed { reason },
            CoreError::MalformedReply { reason } => Self::MalformedReply { reason },
            CoreError::MissingToken => Self::MissingToken,
            CoreError::NotAuthorized => Self::NotAuthorized,
            CoreError::Crypto {
                what,
                expected,
                got,
            } => Self::Crypto {
                what,
                expected,
                got,
            },
            CoreError::DeviceNotFound { mac } => Self::DeviceNotFound { mac },
            CoreError::UnsupportedDevice { mac, description } => {
                Self::UnsupportedDevice { mac, description }
            }
            CoreError::ValidationFailed { message } => Self::Validation {
                field: "input".into(),
                reason: message,
            },
        }
    }
}
