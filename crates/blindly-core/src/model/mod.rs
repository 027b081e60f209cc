// ── Domain model ──

mod codes;
mod device;

pub use codes::{DeviceState, DeviceType, Operation, VoltageMode, WirelessMode};
pub use device::{DeviceStatus, DeviceSummary, HubInfo};
