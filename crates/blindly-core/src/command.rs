// ── Device commands ──

use crate::error::CoreError;
use crate::model::Operation;

/// A write command for one device: an operation plus, for positional
/// commands, a target percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub operation: Operation,
    /// Target percentage (0–100) for positional commands.
    pub value: Option<u8>,
}

impl Command {
    pub fn open() -> Self {
        Self {
            operation: Operation::Open,
            value: None,
        }
    }

    pub fn close() -> Self {
        Self {
            operation: Operation::Close,
            value: None,
        }
    }

    pub fn stop() -> Self {
        Self {
            operation: Operation::Stop,
            value: None,
        }
    }

    pub fn status() -> Self {
        Self {
            operation: Operation::Status,
            value: None,
        }
    }

    /// Attach a target percentage to a positional command.
    pub fn with_position(mut self, percent: u8) -> Self {
        self.value = Some(percent);
        self
    }

    /// Check the value range before dispatch.
    pub fn validate(&self) -> Result<(), CoreError> {
        match self.value {
            Some(v) if v > 100 => Err(CoreError::ValidationFailed {
                message: format!("position must be 0-100, got {v}"),
            }),
            _ => Ok(()),
        }
    }
}
