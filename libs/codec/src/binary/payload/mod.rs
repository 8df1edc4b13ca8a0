//! # Payload Hub
//!
//! Every payload travels behind a u32 length prefix; a zero prefix means no
//! payload. The body starts with a u32 tag that selects one of five
//! variants. Milestones and receipts recurse back into this module for the
//! payload they embed, and each caller decides which embedded kind it
//! accepts.
//!
//! Serialization is two-pass: a placeholder prefix is written, the body is
//! encoded after it, and the prefix is patched with the body length.

mod indexation;
mod milestone;
mod receipt;
mod transaction;
mod treasury_transaction;

pub use indexation::{deserialize_indexation_payload, serialize_indexation_payload};
pub use milestone::{
    deserialize_milestone_payload, serialize_milestone_essence, serialize_milestone_payload,
};
pub use receipt::{
    deserialize_migrated_funds, deserialize_receipt_payload, serialize_migrated_funds,
    serialize_receipt_payload,
};
pub use transaction::{deserialize_transaction_payload, serialize_transaction_payload};
pub use treasury_transaction::{
    deserialize_treasury_transaction_payload, serialize_treasury_transaction_payload,
};

use crate::constants::MIN_PAYLOAD_LENGTH;
use crate::error::{ProtocolError, ProtocolResult};
use crate::stream::{ReadStream, WriteStream};
use tangle_types::{Payload, PayloadKind};
use tracing::{debug, trace, warn};

/// Decode a length-prefixed payload; `None` when the prefix is zero
pub fn deserialize_payload(stream: &mut ReadStream<'_>) -> ProtocolResult<Option<Payload>> {
    deserialize_payload_inner(stream, None)
}

/// Decode an embedded payload that may only be of the `allowed` kind.
///
/// The tag is checked before the body is decoded, so a disallowed payload
/// never recurses.
pub fn deserialize_payload_of(
    stream: &mut ReadStream<'_>,
    context: &'static str,
    allowed: PayloadKind,
) -> ProtocolResult<Option<Payload>> {
    deserialize_payload_inner(stream, Some((context, allowed)))
}

fn deserialize_payload_inner(
    stream: &mut ReadStream<'_>,
    allowed: Option<(&'static str, PayloadKind)>,
) -> ProtocolResult<Option<Payload>> {
    let length = stream.read_u32("payload.length")? as usize;
    if length == 0 {
        trace!("payload absent");
        return Ok(None);
    }
    if !stream.has_remaining(length) {
        warn!(length, remaining = stream.unused(), "payload length runs past buffer");
        return Err(ProtocolError::PayloadOverrun {
            length,
            remaining: stream.unused(),
        });
    }
    if length < MIN_PAYLOAD_LENGTH {
        return Err(ProtocolError::minimum_length("Payload", length, MIN_PAYLOAD_LENGTH));
    }

    let start = stream.read_index();
    let tag = stream.peek_u32("payload.type")?;
    let kind =
        PayloadKind::try_from(tag).map_err(|_| ProtocolError::unrecognized("payload", tag))?;
    if let Some((context, allowed)) = allowed {
        if kind != allowed {
            warn!(context, kind = kind.name(), "embedded payload not allowed");
            return Err(ProtocolError::PayloadNotAllowed {
                context,
                kind: kind.name(),
            });
        }
    }
    debug!(kind = kind.name(), length, "decoding payload");

    let payload: Payload = match kind {
        PayloadKind::Transaction => deserialize_transaction_payload(stream)?.into(),
        PayloadKind::Milestone => deserialize_milestone_payload(stream)?.into(),
        PayloadKind::Indexation => deserialize_indexation_payload(stream)?.into(),
        PayloadKind::Receipt => deserialize_receipt_payload(stream)?.into(),
        PayloadKind::TreasuryTransaction => {
            deserialize_treasury_transaction_payload(stream)?.into()
        }
    };

    let consumed = stream.read_index() - start;
    if consumed != length {
        warn!(kind = kind.name(), length, consumed, "payload length prefix mismatch");
        return Err(ProtocolError::invalid_value(
            "payload.length",
            format!("declared {length} bytes but the {} payload is {consumed}", kind.name()),
        ));
    }
    Ok(Some(payload))
}

/// Encode a payload behind its length prefix; `None` writes a zero prefix
pub fn serialize_payload(
    stream: &mut WriteStream,
    payload: Option<&Payload>,
) -> ProtocolResult<()> {
    let Some(payload) = payload else {
        stream.write_u32(0);
        return Ok(());
    };

    let prefix_index = stream.write_index();
    stream.write_u32(0);
    let body_start = stream.write_index();
    serialize_payload_body(stream, payload)?;
    let end = stream.write_index();

    let length = u32::try_from(end - body_start).map_err(|_| {
        ProtocolError::invalid_value("payload.length", "payload body does not fit a u32 prefix")
    })?;
    stream.set_write_index(prefix_index);
    stream.write_u32(length);
    stream.set_write_index(end);
    trace!(kind = payload.kind().name(), length, "payload encoded");
    Ok(())
}

/// Encode the tagged body without the length prefix
pub fn serialize_payload_body(stream: &mut WriteStream, payload: &Payload) -> ProtocolResult<()> {
    match payload {
        Payload::Transaction(p) => serialize_transaction_payload(stream, p),
        Payload::Milestone(p) => serialize_milestone_payload(stream, p),
        Payload::Indexation(p) => serialize_indexation_payload(stream, p),
        Payload::Receipt(p) => serialize_receipt_payload(stream, p),
        Payload::TreasuryTransaction(p) => serialize_treasury_transaction_payload(stream, p),
    }
}

/// Consume a u32 payload tag and fail unless it is `kind`
pub(crate) fn expect_payload_tag(
    stream: &mut ReadStream<'_>,
    kind: PayloadKind,
    entity: &'static str,
) -> ProtocolResult<()> {
    let tag = stream.read_u32("payload.type")?;
    if tag != kind as u32 {
        return Err(ProtocolError::type_mismatch(entity, tag));
    }
    Ok(())
}

/// Fail unless an embedded payload is absent or of an `allowed` kind
pub(crate) fn check_embedded(
    context: &'static str,
    payload: Option<&Payload>,
    allowed: PayloadKind,
) -> ProtocolResult<()> {
    match payload {
        Some(p) if p.kind() != allowed => {
            warn!(context, kind = p.kind().name(), "embedded payload not allowed");
            Err(ProtocolError::PayloadNotAllowed {
                context,
                kind: p.kind().name(),
            })
        }
        _ => Ok(()),
    }
}
