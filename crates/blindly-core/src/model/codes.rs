// Protocol code tables
//
// Value→meaning tables reproduced verbatim from the hub protocol.
// Unmapped codes land on an explicit `Unknown` sentinel rather than a
// lookup failure, so new firmware never breaks parsing.

use serde::Serialize;

// ── Device type ─────────────────────────────────────────────────────

/// Device class, from the 8-character hex code the hub reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DeviceType {
    /// `02000001` — the hub itself.
    WifiBridge,
    /// `10000000` — 433 MHz bidirectional radio motor. The only class
    /// the protocol's read/write messages address.
    RadioMotor,
    /// `22000000`
    WifiCurtain,
    /// `22000002`
    WifiTubularMotor,
    /// `22000005`
    WifiReceiver,
    /// Any code not in the table above.
    Unknown(String),
}

impl DeviceType {
    pub fn from_code(code: &str) -> Self {
        match code {
            "02000001" => Self::WifiBridge,
            "10000000" => Self::RadioMotor,
            "22000000" => Self::WifiCurtain,
            "22000002" => Self::WifiTubularMotor,
            "22000005" => Self::WifiReceiver,
            other => Self::Unknown(other.to_owned()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Self::WifiBridge => "02000001",
            Self::RadioMotor => "10000000",
            Self::WifiCurtain => "22000000",
            Self::WifiTubularMotor => "22000002",
            Self::WifiReceiver => "22000005",
            Self::Unknown(code) => code,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::WifiBridge => "Wi-Fi Bridge",
            Self::RadioMotor => "433 MHz bidirectional motor",
            Self::WifiCurtain => "Wi-Fi curtain",
            Self::WifiTubularMotor => "Wi-Fi tubular motor",
            Self::WifiReceiver => "Wi-Fi receiver",
            Self::Unknown(_) => "unknown device type",
        }
    }

    /// Whether read/write messages may target this class.
    pub fn is_controllable(&self) -> bool {
        matches!(self, Self::RadioMotor)
    }
}

// ── Operation ───────────────────────────────────────────────────────

/// Motor operation code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operation {
    Close,
    Open,
    Stop,
    Status,
    Unknown(u8),
}

impl Operation {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Close,
            1 => Self::Open,
            2 => Self::Stop,
            3 => Self::Status,
            other => Self::Unknown(other),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Close => 0,
            Self::Open => 1,
            Self::Stop => 2,
            Self::Status => 3,
            Self::Unknown(code) => code,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Close => "Close",
            Self::Open => "Open",
            Self::Stop => "Stop/Halt",
            Self::Status => "Status",
            Self::Unknown(_) => "unknown operation",
        }
    }
}

// ── Device state (limit configuration) ──────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeviceState {
    NoLimit,
    TopLimit,
    BottomLimit,
    BothLimits,
    ThirdLimit,
    Unknown(u8),
}

impl DeviceState {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::NoLimit,
            1 => Self::TopLimit,
            2 => Self::BottomLimit,
            3 => Self::BothLimits,
            4 => Self::ThirdLimit,
            other => Self::Unknown(other),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::NoLimit => "No limit",
            Self::TopLimit => "Top limit",
            Self::BottomLimit => "Bottom limit",
            Self::BothLimits => "Both limits",
            Self::ThirdLimit => "Third limit",
            Self::Unknown(_) => "unknown state",
        }
    }
}

// ── Voltage mode ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VoltageMode {
    Ac,
    Dc,
    Unknown(u8),
}

impl VoltageMode {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Ac,
            1 => Self::Dc,
            other => Self::Unknown(other),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Ac => "AC",
            Self::Dc => "DC",
            Self::Unknown(_) => "unknown voltage mode",
        }
    }
}

// ── Wireless mode ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WirelessMode {
    UniDirection,
    BiDirection,
    BiDirectionMechanicalLimits,
    Other,
    Unknown(u8),
}

impl WirelessMode {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::UniDirection,
            1 => Self::BiDirection,
            2 => Self::BiDirectionMechanicalLimits,
            3 => Self::Other,
            other => Self::Unknown(other),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::UniDirection => "Uni-direction",
            Self::BiDirection => "Bi-direction",
            Self::BiDirectionMechanicalLimits => "Bi-direction with mechanical limits",
            Self::Other => "Other",
            Self::Unknown(_) => "unknown wireless mode",
        }
    }
}
