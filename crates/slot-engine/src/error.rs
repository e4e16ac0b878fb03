//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("invalid time range: start minute {start} is after end minute {end}")]
    InvalidRange { start: u32, end: u32 },

    #[error("time range [{start}, {end}) extends past the 1440-minute day")]
    OutOfBounds { start: u32, end: u32 },
}

pub type Result<T> = std::result::Result<T, SlotError>;
