//! # Error Types for the AGC core definition

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    #[error("Invalid opcode: {0} (valid range: 0-7)")]
    InvalidOpcode(u8),

    #[error("Address field out of range: {0:#o} (max 0o7777)")]
    AddressOutOfRange(u16),
}

pub type Result<T> = std::result::Result<T, SpecError>;
