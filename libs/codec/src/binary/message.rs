//! # Message Envelope
//!
//! ```text
//! networkId u64 | parentCount u8 | parents 32×n | payload (u32 len + body) | nonce u64
//! ```
//!
//! Parents must arrive sorted and unique; the codec rejects anything else
//! rather than reordering. A decode must consume the whole buffer.

use super::payload::{deserialize_payload, serialize_payload};
use super::{check_count, check_sorted_unique, count_u8, require};
use crate::constants::{
    MAX_MESSAGE_LENGTH, MAX_NUMBER_PARENTS, MIN_MESSAGE_LENGTH, MIN_NUMBER_PARENTS,
};
use crate::error::{ProtocolError, ProtocolResult};
use crate::stream::{ReadStream, WriteStream};
use tangle_types::common::strip_hex_prefix;
use tangle_types::{Message, MessageId, Payload};
use tracing::{debug, warn};

const CONTEXT: &str = "Message";

pub fn deserialize_message(stream: &mut ReadStream<'_>) -> ProtocolResult<Message> {
    require(stream, "Message", MIN_MESSAGE_LENGTH)?;
    if stream.unused() > MAX_MESSAGE_LENGTH {
        return Err(ProtocolError::MessageTooLarge {
            size: stream.unused(),
            max: MAX_MESSAGE_LENGTH,
        });
    }

    let network_id = stream.read_u64("message.networkId")?;
    let parent_count = stream.read_u8("message.numParents")?;
    let parents = (0..parent_count)
        .map(|_| Ok(MessageId::new(stream.read_array("message.parentMessageId")?)))
        .collect::<ProtocolResult<Vec<_>>>()?;
    check_parents(&parents).inspect_err(|e| warn!(error = %e, "message parents rejected"))?;

    let payload = deserialize_payload(stream)?;
    if let Some(payload) = &payload {
        check_message_payload(payload)?;
    }

    let nonce = stream.read_u64("message.nonce")?;

    if stream.unused() != 0 {
        warn!(unused = stream.unused(), "trailing bytes after message");
        return Err(ProtocolError::TrailingBytes {
            total: stream.length(),
            unused: stream.unused(),
        });
    }

    debug!(
        network_id,
        parents = parents.len(),
        payload = payload.as_ref().map(|p| p.kind().name()),
        "message decoded"
    );
    Ok(Message {
        network_id,
        parents,
        payload,
        nonce,
    })
}

pub fn serialize_message(stream: &mut WriteStream, message: &Message) -> ProtocolResult<()> {
    let parent_count = count_u8(
        "parents",
        message.parents.len(),
        MIN_NUMBER_PARENTS,
        MAX_NUMBER_PARENTS,
    )?;
    check_parents(&message.parents)?;
    if let Some(payload) = &message.payload {
        check_message_payload(payload)?;
    }

    let start = stream.write_index();
    stream.write_u64(message.network_id);
    stream.write_u8(parent_count);
    for parent in &message.parents {
        stream.write_bytes(parent.as_bytes());
    }
    serialize_payload(stream, message.payload.as_ref())?;
    stream.write_u64(message.nonce);

    let size = stream.write_index() - start;
    if size > MAX_MESSAGE_LENGTH {
        warn!(size, "encoded message exceeds maximum length");
        return Err(ProtocolError::MessageTooLarge {
            size,
            max: MAX_MESSAGE_LENGTH,
        });
    }
    debug!(size, "message encoded");
    Ok(())
}

pub fn serialize_message_bytes(message: &Message) -> ProtocolResult<Vec<u8>> {
    let mut stream = WriteStream::new();
    serialize_message(&mut stream, message)?;
    Ok(stream.into_bytes())
}

/// Lowercase hex without prefix
pub fn serialize_message_hex(message: &Message) -> ProtocolResult<String> {
    serialize_message_bytes(message).map(hex::encode)
}

pub fn deserialize_message_bytes(bytes: &[u8]) -> ProtocolResult<Message> {
    deserialize_message(&mut ReadStream::new(bytes))
}

/// Accepts hex with or without a `0x` prefix
pub fn deserialize_message_hex(value: &str) -> ProtocolResult<Message> {
    let bytes = hex::decode(strip_hex_prefix(value)).map_err(|e| ProtocolError::InvalidHex {
        field: "message".to_string(),
        reason: e.to_string(),
    })?;
    deserialize_message_bytes(&bytes)
}

fn check_parents(parents: &[MessageId]) -> ProtocolResult<()> {
    check_count("parents", parents.len(), MIN_NUMBER_PARENTS, MAX_NUMBER_PARENTS)?;
    check_sorted_unique("parents", parents)
}

fn check_message_payload(payload: &Payload) -> ProtocolResult<()> {
    let kind = payload.kind();
    if kind.allowed_in_message() {
        Ok(())
    } else {
        warn!(kind = kind.name(), "payload not allowed in a message");
        Err(ProtocolError::PayloadNotAllowed {
            context: CONTEXT,
            kind: kind.name(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tangle_types::{
        IndexationPayload, MilestoneId, TreasuryInput, TreasuryOutput, TreasuryTransactionPayload,
    };

    fn parent(fill: u8) -> MessageId {
        MessageId::new([fill; 32])
    }

    fn message() -> Message {
        Message {
            network_id: 6_530_425_480_034_647_824,
            parents: vec![parent(0x11), parent(0x22)],
            payload: Some(Payload::Indexation(IndexationPayload {
                index: b"tangle".to_vec(),
                data: b"hello".to_vec(),
            })),
            nonce: 7_205_759_403_792_939_531,
        }
    }

    #[test]
    fn test_message_decodes_back() {
        let message = message();
        let bytes = serialize_message_bytes(&message).unwrap();
        assert_eq!(&bytes[..8], &message.network_id.to_le_bytes());
        assert_eq!(bytes[8], 2);
        assert_eq!(deserialize_message_bytes(&bytes).unwrap(), message);
    }

    #[test]
    fn test_minimal_message_length() {
        let message = Message::new(1, vec![parent(1)], None);
        let bytes = serialize_message_bytes(&message).unwrap();
        assert_eq!(bytes.len(), MIN_MESSAGE_LENGTH);
    }

    #[test]
    fn test_hex_helpers_accept_prefix() {
        let message = message();
        let hex = serialize_message_hex(&message).unwrap();
        assert_eq!(deserialize_message_hex(&hex).unwrap(), message);
        assert_eq!(deserialize_message_hex(&format!("0x{hex}")).unwrap(), message);
        assert!(matches!(
            deserialize_message_hex("0xzz"),
            Err(ProtocolError::InvalidHex { .. })
        ));
    }

    #[test]
    fn test_parent_rules() {
        let mut unsorted = message();
        unsorted.parents.reverse();
        assert_eq!(
            serialize_message_bytes(&unsorted),
            Err(ProtocolError::NotSorted { entity: "parents" })
        );

        let mut duplicated = message();
        duplicated.parents = vec![parent(1), parent(1)];
        assert_eq!(
            serialize_message_bytes(&duplicated),
            Err(ProtocolError::Duplicate { entity: "parents" })
        );

        let mut none = message();
        none.parents.clear();
        assert!(serialize_message_bytes(&none).is_err());

        let mut nine = message();
        nine.parents = (1..=9).map(parent).collect();
        assert_eq!(
            serialize_message_bytes(&nine),
            Err(ProtocolError::count_out_of_range("parents", 9, 1, 8))
        );

        let mut eight = message();
        eight.parents = (1..=8).map(parent).collect();
        assert!(serialize_message_bytes(&eight).is_ok());
    }

    #[test]
    fn test_unsorted_parents_rejected_on_decode() {
        let mut bytes = serialize_message_bytes(&message()).unwrap();
        // swap the two parent ids in place
        let (first, second) = bytes[9..9 + 64].split_at_mut(32);
        first.swap_with_slice(second);
        assert_eq!(
            deserialize_message_bytes(&bytes),
            Err(ProtocolError::NotSorted { entity: "parents" })
        );
    }

    #[test]
    fn test_treasury_transaction_not_allowed() {
        let mut message = message();
        message.payload = Some(Payload::TreasuryTransaction(TreasuryTransactionPayload {
            input: TreasuryInput {
                milestone_id: MilestoneId::new([0u8; 32]),
            },
            output: TreasuryOutput { amount: 1 },
        }));
        assert_eq!(
            serialize_message_bytes(&message),
            Err(ProtocolError::PayloadNotAllowed {
                context: "Message",
                kind: "Treasury Transaction",
            })
        );
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let mut bytes = serialize_message_bytes(&message()).unwrap();
        bytes.push(0);
        let total = bytes.len();
        assert_eq!(
            deserialize_message_bytes(&bytes),
            Err(ProtocolError::TrailingBytes { total, unused: 1 })
        );
    }

    #[test]
    fn test_oversized_message_rejected() {
        let mut message = message();
        message.payload = Some(Payload::Indexation(IndexationPayload {
            index: b"big".to_vec(),
            data: vec![0u8; MAX_MESSAGE_LENGTH],
        }));
        assert!(matches!(
            serialize_message_bytes(&message),
            Err(ProtocolError::MessageTooLarge { .. })
        ));
    }
}
