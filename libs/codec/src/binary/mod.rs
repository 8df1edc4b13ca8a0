//! # Binary Codecs
//!
//! One module per wire family. Each family exposes `serialize_*` and
//! `deserialize_*` free functions that drive a `WriteStream`/`ReadStream`:
//!
//! ```text
//! deserialize_message
//!   └─ deserialize_payload ─┬─ transaction ─ essence ─┬─ inputs
//!        ↑                  │                         ├─ outputs ─ unlock conditions ─ address
//!        │                  │                         └─ payload (indexation)
//!        │                  ├─ milestone ─ payload (receipt)
//!        └──────────────────┴─ receipt ─── payload (treasury transaction)
//! ```
//!
//! Family decoders check the family minimum, peek the tag, and dispatch;
//! variant decoders re-check their own minimum and the tag they consume.

pub mod address;
pub mod essence;
pub mod feature;
pub mod input;
pub mod message;
pub mod native_token;
pub mod output;
pub mod payload;
pub mod signature;
pub mod token_scheme;
pub mod unlock_block;
pub mod unlock_condition;

use crate::error::{ProtocolError, ProtocolResult};
use crate::stream::ReadStream;
use std::collections::BTreeSet;

pub use address::{deserialize_address, serialize_address};
pub use essence::{deserialize_transaction_essence, serialize_transaction_essence};
pub use feature::{deserialize_feature, deserialize_features, serialize_feature, serialize_features};
pub use input::{deserialize_input, deserialize_inputs, serialize_input, serialize_inputs};
pub use message::{
    deserialize_message, deserialize_message_bytes, deserialize_message_hex, serialize_message,
    serialize_message_bytes, serialize_message_hex,
};
pub use native_token::{deserialize_native_tokens, serialize_native_tokens};
pub use output::{deserialize_output, deserialize_outputs, serialize_output, serialize_outputs};
pub use payload::{deserialize_payload, serialize_payload};
pub use signature::{deserialize_signature, serialize_signature};
pub use token_scheme::{deserialize_token_scheme, serialize_token_scheme};
pub use unlock_block::{
    deserialize_unlock_block, deserialize_unlock_blocks, serialize_unlock_block,
    serialize_unlock_blocks,
};
pub use unlock_condition::{
    deserialize_unlock_condition, deserialize_unlock_conditions, serialize_unlock_condition,
    serialize_unlock_conditions,
};

/// Fail unless `min` bytes remain for `entity`
pub(crate) fn require(
    stream: &ReadStream<'_>,
    entity: &'static str,
    min: usize,
) -> ProtocolResult<()> {
    if stream.has_remaining(min) {
        Ok(())
    } else {
        Err(ProtocolError::minimum_length(entity, stream.unused(), min))
    }
}

/// Range-check a sequence length and narrow it to a u8 count prefix
pub(crate) fn count_u8(
    entity: &'static str,
    count: usize,
    min: usize,
    max: usize,
) -> ProtocolResult<u8> {
    check_count(entity, count, min, max)?;
    u8::try_from(count).map_err(|_| ProtocolError::count_out_of_range(entity, count, min, max))
}

/// Range-check a sequence length and narrow it to a u16 count prefix
pub(crate) fn count_u16(
    entity: &'static str,
    count: usize,
    min: usize,
    max: usize,
) -> ProtocolResult<u16> {
    check_count(entity, count, min, max)?;
    u16::try_from(count).map_err(|_| ProtocolError::count_out_of_range(entity, count, min, max))
}

pub(crate) fn check_count(
    entity: &'static str,
    count: usize,
    min: usize,
    max: usize,
) -> ProtocolResult<()> {
    if count < min || count > max {
        return Err(ProtocolError::count_out_of_range(entity, count, min, max));
    }
    Ok(())
}

/// Elements must be unique and already in ascending order; an unsorted
/// sequence is rejected, never repaired.
pub(crate) fn check_sorted_unique<T: Ord>(entity: &'static str, items: &[T]) -> ProtocolResult<()> {
    let distinct: BTreeSet<&T> = items.iter().collect();
    if distinct.len() != items.len() {
        return Err(ProtocolError::Duplicate { entity });
    }
    if items.windows(2).any(|pair| pair[0] > pair[1]) {
        return Err(ProtocolError::NotSorted { entity });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_unique_distinguishes_duplicate_from_unsorted() {
        assert!(check_sorted_unique("parents", &[1, 2, 3]).is_ok());
        assert_eq!(
            check_sorted_unique("parents", &[1, 1]),
            Err(ProtocolError::Duplicate { entity: "parents" })
        );
        assert_eq!(
            check_sorted_unique("parents", &[2, 1]),
            Err(ProtocolError::NotSorted { entity: "parents" })
        );
        assert_eq!(
            check_sorted_unique("parents", &[2, 1, 2]),
            Err(ProtocolError::Duplicate { entity: "parents" })
        );
    }

    #[test]
    fn test_count_narrowing() {
        assert_eq!(count_u8("parents", 8, 1, 8), Ok(8));
        assert!(count_u8("parents", 0, 1, 8).is_err());
        assert!(count_u8("parents", 9, 1, 8).is_err());
        assert_eq!(count_u16("inputs", 127, 1, 127), Ok(127));
    }
}
