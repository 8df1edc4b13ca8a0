//! Milestone payload.
//!
//! The essence (everything between the tag and the signatures) is what the
//! coordinator keys sign, so it has its own encoder for hashing.

use super::{check_embedded, deserialize_payload_of, expect_payload_tag, serialize_payload};
use crate::binary::{check_count, check_sorted_unique, count_u8, require};
use crate::constants::{MAX_NUMBER_PARENTS, MIN_MILESTONE_PAYLOAD_LENGTH, MIN_NUMBER_PARENTS};
use crate::error::{ProtocolError, ProtocolResult};
use crate::stream::{ReadStream, WriteStream};
use tangle_types::{
    Ed25519PublicKey, Ed25519Signature, MerkleProof, MessageId, MilestonePayload, PayloadKind,
};
use tracing::warn;

const CONTEXT: &str = "Milestone";

pub fn deserialize_milestone_payload(
    stream: &mut ReadStream<'_>,
) -> ProtocolResult<MilestonePayload> {
    require(stream, "Milestone Payload", MIN_MILESTONE_PAYLOAD_LENGTH)?;
    expect_payload_tag(stream, PayloadKind::Milestone, "milestonePayload")?;

    let index = stream.read_u32("milestonePayload.index")?;
    let timestamp = stream.read_u64("milestonePayload.timestamp")?;

    let parent_count = stream.read_u8("milestonePayload.numParents")?;
    let parents = (0..parent_count)
        .map(|_| Ok(MessageId::new(stream.read_array("milestonePayload.parentMessageId")?)))
        .collect::<ProtocolResult<Vec<_>>>()?;
    check_parents(&parents)
        .inspect_err(|e| warn!(index, error = %e, "milestone parents rejected"))?;

    let inclusion_merkle_proof =
        MerkleProof::new(stream.read_array("milestonePayload.inclusionMerkleProof")?);
    let next_pow_score = stream.read_u32("milestonePayload.nextPoWScore")?;
    let next_pow_score_milestone_index =
        stream.read_u32("milestonePayload.nextPoWScoreMilestoneIndex")?;

    let key_count = stream.read_u8("milestonePayload.numPublicKeys")?;
    let public_keys = (0..key_count)
        .map(|_| Ok(Ed25519PublicKey::new(stream.read_array("milestonePayload.publicKey")?)))
        .collect::<ProtocolResult<Vec<_>>>()?;
    check_sorted_unique("public keys", &public_keys)?;

    let receipt = deserialize_payload_of(stream, CONTEXT, PayloadKind::Receipt)?;

    let signature_count = stream.read_u8("milestonePayload.numSignatures")?;
    let signatures = (0..signature_count)
        .map(|_| Ok(Ed25519Signature::new(stream.read_array("milestonePayload.signature")?)))
        .collect::<ProtocolResult<Vec<_>>>()?;

    Ok(MilestonePayload {
        index,
        timestamp,
        parents,
        inclusion_merkle_proof,
        next_pow_score,
        next_pow_score_milestone_index,
        public_keys,
        receipt: receipt.map(Box::new),
        signatures,
    })
}

pub fn serialize_milestone_payload(
    stream: &mut WriteStream,
    payload: &MilestonePayload,
) -> ProtocolResult<()> {
    if payload.public_keys.len() != payload.signatures.len() {
        return Err(ProtocolError::invalid_value(
            "milestonePayload.signatures",
            format!(
                "{} public keys but {} signatures",
                payload.public_keys.len(),
                payload.signatures.len()
            ),
        ));
    }
    let signature_count =
        count_u8("signatures", payload.signatures.len(), 1, usize::from(u8::MAX))?;

    stream.write_u32(PayloadKind::Milestone as u32);
    serialize_milestone_essence(stream, payload)?;
    stream.write_u8(signature_count);
    for signature in &payload.signatures {
        stream.write_bytes(signature.as_bytes());
    }
    Ok(())
}

/// Everything after the tag and before the signatures
pub fn serialize_milestone_essence(
    stream: &mut WriteStream,
    payload: &MilestonePayload,
) -> ProtocolResult<()> {
    let parent_count = count_u8(
        "parents",
        payload.parents.len(),
        MIN_NUMBER_PARENTS,
        MAX_NUMBER_PARENTS,
    )?;
    check_parents(&payload.parents)?;
    let key_count = count_u8("public keys", payload.public_keys.len(), 1, usize::from(u8::MAX))?;
    check_sorted_unique("public keys", &payload.public_keys)?;
    let receipt = payload.receipt.as_deref();
    check_embedded(CONTEXT, receipt, PayloadKind::Receipt)?;

    stream.write_u32(payload.index);
    stream.write_u64(payload.timestamp);
    stream.write_u8(parent_count);
    for parent in &payload.parents {
        stream.write_bytes(parent.as_bytes());
    }
    stream.write_bytes(payload.inclusion_merkle_proof.as_bytes());
    stream.write_u32(payload.next_pow_score);
    stream.write_u32(payload.next_pow_score_milestone_index);
    stream.write_u8(key_count);
    for key in &payload.public_keys {
        stream.write_bytes(key.as_bytes());
    }
    serialize_payload(stream, receipt)
}

fn check_parents(parents: &[MessageId]) -> ProtocolResult<()> {
    check_count("parents", parents.len(), MIN_NUMBER_PARENTS, MAX_NUMBER_PARENTS)?;
    check_sorted_unique("parents", parents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary::payload::{deserialize_payload, serialize_payload};
    use tangle_types::{IndexationPayload, Payload};

    fn milestone() -> MilestonePayload {
        MilestonePayload {
            index: 15465,
            timestamp: 1_602_227_215,
            parents: vec![MessageId::new([0x01; 32]), MessageId::new([0x02; 32])],
            inclusion_merkle_proof: MerkleProof::new([0x03; 32]),
            next_pow_score: 0,
            next_pow_score_milestone_index: 0,
            public_keys: vec![Ed25519PublicKey::new([0x04; 32]), Ed25519PublicKey::new([0x05; 32])],
            receipt: None,
            signatures: vec![Ed25519Signature::new([0x06; 64]), Ed25519Signature::new([0x07; 64])],
        }
    }

    #[test]
    fn test_milestone_decodes_back() {
        let payload = Payload::Milestone(milestone());
        let mut out = WriteStream::new();
        serialize_payload(&mut out, Some(&payload)).unwrap();
        let bytes = out.into_bytes();

        let mut input = ReadStream::new(&bytes);
        assert_eq!(deserialize_payload(&mut input).unwrap(), Some(payload));
        assert_eq!(input.unused(), 0);
    }

    #[test]
    fn test_essence_excludes_signatures() {
        let payload = milestone();
        let mut essence = WriteStream::new();
        serialize_milestone_essence(&mut essence, &payload).unwrap();
        let mut full = WriteStream::new();
        serialize_milestone_payload(&mut full, &payload).unwrap();

        assert_eq!(full.length(), 4 + essence.length() + 1 + 2 * 64);
        assert_eq!(&full.final_bytes()[4..4 + essence.length()], essence.final_bytes());
    }

    #[test]
    fn test_key_signature_count_mismatch() {
        let mut payload = milestone();
        payload.signatures.pop();
        let err = serialize_milestone_payload(&mut WriteStream::new(), &payload).unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidValue { .. }));
    }

    #[test]
    fn test_unsorted_parents_rejected() {
        let mut payload = milestone();
        payload.parents.reverse();
        let err = serialize_milestone_payload(&mut WriteStream::new(), &payload).unwrap_err();
        assert_eq!(err, ProtocolError::NotSorted { entity: "parents" });
    }

    #[test]
    fn test_unsorted_public_keys_rejected() {
        let mut payload = milestone();
        payload.public_keys.reverse();
        let err = serialize_milestone_payload(&mut WriteStream::new(), &payload).unwrap_err();
        assert_eq!(err, ProtocolError::NotSorted { entity: "public keys" });
    }

    #[test]
    fn test_only_receipt_may_be_embedded() {
        let mut payload = milestone();
        payload.receipt = Some(Box::new(Payload::Indexation(IndexationPayload {
            index: b"x".to_vec(),
            data: vec![],
        })));
        let err = serialize_milestone_payload(&mut WriteStream::new(), &payload).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::PayloadNotAllowed {
                context: "Milestone",
                kind: "Indexation",
            }
        );
    }
}
