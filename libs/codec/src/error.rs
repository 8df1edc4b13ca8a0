//! Codec errors for binary encoding and decoding
//!
//! Every failure aborts the whole encode/decode; there is no partial result.
//! Each variant names the field or entity that failed so the message can be
//! surfaced verbatim to whoever handed in the buffer.

use thiserror::Error;

/// Binary codec errors with diagnostic context
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Not enough bytes left for the next field
    #[error("{field} length {need} exceeds the remaining data {remaining}")]
    ShortBuffer {
        field: String,
        need: usize,
        remaining: usize,
    },

    /// Buffer is smaller than an entity's minimum encoded size
    #[error("{entity} data is {length} in length which is less than the minimum size required of {min}")]
    MinimumLength {
        entity: &'static str,
        length: usize,
        min: usize,
    },

    /// Tag matches no known variant of the family
    #[error("Unrecognized {family} type {tag}")]
    UnrecognizedType { family: &'static str, tag: u32 },

    /// Tag read after dispatch differs from the variant being decoded
    #[error("Type mismatch in {entity} {tag}")]
    TypeMismatch { entity: &'static str, tag: u32 },

    /// Hex text could not be decoded
    #[error("{field} is not valid hex: {reason}")]
    InvalidHex { field: String, reason: String },

    /// Hex text decoded to the wrong number of bytes
    #[error("{field} should be {expected} bytes but is {got}")]
    HexLengthMismatch {
        field: String,
        expected: usize,
        got: usize,
    },

    /// Sequence length outside its permitted range
    #[error("{entity} count {count} is outside the allowed range {min}..={max}")]
    CountOutOfRange {
        entity: &'static str,
        count: usize,
        min: usize,
        max: usize,
    },

    /// Elements not in lexicographic order
    #[error("The {entity} must be lexicographically sorted")]
    NotSorted { entity: &'static str },

    /// Same element more than once
    #[error("The {entity} must be unique")]
    Duplicate { entity: &'static str },

    /// Bytes left over after a complete decode
    #[error("Message data length {total} has unused data {unused}")]
    TrailingBytes { total: usize, unused: usize },

    /// Payload kind not permitted at this nesting level
    #[error("{context} can not contain a {kind} payload")]
    PayloadNotAllowed {
        context: &'static str,
        kind: &'static str,
    },

    /// Declared payload length runs past the end of the buffer
    #[error("Payload length {length} exceeds the remaining data {remaining}")]
    PayloadOverrun { length: usize, remaining: usize },

    /// Encoded message exceeds the protocol ceiling
    #[error("The message length is {size}, which exceeds the maximum size of {max}")]
    MessageTooLarge { size: usize, max: usize },

    /// A field holds a value the wire format cannot express
    #[error("Invalid {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ProtocolError {
    pub fn short_buffer(field: impl Into<String>, need: usize, remaining: usize) -> Self {
        Self::ShortBuffer {
            field: field.into(),
            need,
            remaining,
        }
    }

    pub fn minimum_length(entity: &'static str, length: usize, min: usize) -> Self {
        Self::MinimumLength {
            entity,
            length,
            min,
        }
    }

    pub fn unrecognized(family: &'static str, tag: impl Into<u32>) -> Self {
        Self::UnrecognizedType {
            family,
            tag: tag.into(),
        }
    }

    pub fn type_mismatch(entity: &'static str, tag: impl Into<u32>) -> Self {
        Self::TypeMismatch {
            entity,
            tag: tag.into(),
        }
    }

    pub fn count_out_of_range(entity: &'static str, count: usize, min: usize, max: usize) -> Self {
        Self::CountOutOfRange {
            entity,
            count,
            min,
            max,
        }
    }

    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// True for the errors raised when input ends early
    pub fn is_short_buffer(&self) -> bool {
        matches!(
            self,
            Self::ShortBuffer { .. } | Self::MinimumLength { .. } | Self::PayloadOverrun { .. }
        )
    }
}

/// Result type for codec operations
pub type ProtocolResult<T> = std::result::Result<T, ProtocolError>;
