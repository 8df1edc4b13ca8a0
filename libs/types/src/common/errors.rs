//! Error types for identifier and byte-field parsing
//!
//! Raised when a hex string handed to a typed identifier is malformed or has
//! the wrong length for the identifier it is meant to populate.

use thiserror::Error;

/// Errors that can occur while building data-model values from text
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// Input is not valid hexadecimal
    #[error("Invalid hex for {name}: {reason}")]
    InvalidHex { name: &'static str, reason: String },

    /// Decoded byte count does not match the fixed identifier width
    #[error("Invalid length for {name}: expected {expected} bytes, got {got}")]
    InvalidLength {
        name: &'static str,
        expected: usize,
        got: usize,
    },
}

impl TypeError {
    pub fn invalid_hex(name: &'static str, reason: impl ToString) -> Self {
        Self::InvalidHex {
            name,
            reason: reason.to_string(),
        }
    }
}

/// Strips an optional `0x` prefix from a hex string.
pub fn strip_hex_prefix(value: &str) -> &str {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}

/// Decodes a hex string, with or without `0x` prefix.
pub fn decode_hex(name: &'static str, value: &str) -> Result<Vec<u8>, TypeError> {
    hex::decode(strip_hex_prefix(value)).map_err(|e| TypeError::invalid_hex(name, e))
}
