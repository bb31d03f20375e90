//! Error types for the CAP primitives

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, CapError>;

/// Top-level CAP error
#[derive(Debug, Error)]
pub enum CapError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodingError),

    #[error("Decoding error: {0}")]
    Decoding(#[from] DecodingError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while building a primitive from logical values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Error when encoding {primitive}: addressNature is empty")]
    MissingAddressNature { primitive: &'static str },

    #[error("Error when encoding {primitive}: numberingPlan is empty")]
    MissingNumberingPlan { primitive: &'static str },

    #[error("Error when encoding {primitive}: address is empty")]
    MissingAddress { primitive: &'static str },

    #[error("Address length must not exceed {max} digits, got {actual}")]
    AddressTooLong { max: usize, actual: usize },

    #[error("Unknown address nature indicator: {0}")]
    UnknownAddressNature(u8),

    #[error("Unknown numbering plan indicator: {0}")]
    UnknownNumberingPlan(u8),

    #[error("Field length {actual} outside {min}..={max} octets")]
    FieldLength { min: usize, max: usize, actual: usize },
}

/// Errors raised while turning logical text into wire bytes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("Invalid BCD digit: {0:?}")]
    InvalidDigit(char),

    #[error("Invalid GSM7 character: {0:?}")]
    InvalidGsm7Char(char),
}

/// Errors raised while turning wire bytes back into logical text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodingError {
    #[error("Buffer too short: need {needed} octets, got {actual}")]
    BufferTooShort { needed: usize, actual: usize },

    #[error("Invalid BCD nibble 0x{nibble:X} at digit {position}")]
    InvalidBcd { nibble: u8, position: usize },

    #[error("Unknown GSM7 extension code: 0x{0:02X}")]
    UnknownGsm7Extension(u8),

    #[error("GSM7 escape at end of data")]
    DanglingEscape,
}
