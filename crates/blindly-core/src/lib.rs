// blindly-core: Domain layer between blindly-api and consumers (CLI).

pub mod bridge;
pub mod command;
pub mod convert;
pub mod error;
pub mod model;
pub mod session;

// ── Primary re-exports ──────────────────────────────────────────────
pub use bridge::{Bridge, BridgeConfig};
pub use command::Command;
pub use error::CoreError;
pub use session::{Session, SessionState};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    DeviceState, DeviceStatus, DeviceSummary, DeviceType, HubInfo, Operation, VoltageMode,
    WirelessMode,
};
