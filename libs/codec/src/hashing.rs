//! Blake2b-256 identifiers derived from serialized entities.

use crate::binary::essence::serialize_transaction_essence;
use crate::binary::message::serialize_message;
use crate::binary::output::serialize_output;
use crate::binary::payload::{serialize_milestone_essence, serialize_transaction_payload};
use crate::constants::{BLAKE2B_256_LENGTH, TOKEN_ID_LENGTH};
use crate::error::ProtocolResult;
use crate::stream::WriteStream;
use blake2b_simd::Params as Blake2bParams;
use tangle_types::{
    AddressKind, AliasId, Message, MessageId, MilestonePayload, NftId, Output, OutputId, TokenId,
    TokenSchemeKind, TransactionEssence, TransactionId, TransactionPayload,
};

/// Blake2b with a 32-byte digest
pub fn blake2b_256(data: &[u8]) -> [u8; BLAKE2B_256_LENGTH] {
    let hash = Blake2bParams::new().hash_length(BLAKE2B_256_LENGTH).hash(data);
    let mut out = [0u8; BLAKE2B_256_LENGTH];
    out.copy_from_slice(hash.as_bytes());
    out
}

/// Hash of the fully serialized message, nonce included
pub fn message_id(message: &Message) -> ProtocolResult<MessageId> {
    let mut stream = WriteStream::new();
    serialize_message(&mut stream, message)?;
    Ok(MessageId::new(blake2b_256(stream.final_bytes())))
}

/// Hash of the serialized essence; the value an input's key signs
pub fn essence_hash(essence: &TransactionEssence) -> ProtocolResult<[u8; BLAKE2B_256_LENGTH]> {
    let mut stream = WriteStream::new();
    serialize_transaction_essence(&mut stream, essence)?;
    Ok(blake2b_256(stream.final_bytes()))
}

/// Hash of the transaction payload body, tag included, no length prefix
pub fn transaction_id(payload: &TransactionPayload) -> ProtocolResult<TransactionId> {
    let mut stream = WriteStream::new();
    serialize_transaction_payload(&mut stream, payload)?;
    Ok(TransactionId::new(blake2b_256(stream.final_bytes())))
}

/// Hash of the milestone without its signatures
pub fn milestone_essence_hash(
    payload: &MilestonePayload,
) -> ProtocolResult<[u8; BLAKE2B_256_LENGTH]> {
    let mut stream = WriteStream::new();
    serialize_milestone_essence(&mut stream, payload)?;
    Ok(blake2b_256(stream.final_bytes()))
}

/// Hash over the hashes of the serialized outputs being consumed, in order
pub fn inputs_commitment(consumed: &[Output]) -> ProtocolResult<[u8; BLAKE2B_256_LENGTH]> {
    let mut state = Blake2bParams::new().hash_length(BLAKE2B_256_LENGTH).to_state();
    for output in consumed {
        let mut stream = WriteStream::new();
        serialize_output(&mut stream, output)?;
        state.update(&blake2b_256(stream.final_bytes()));
    }
    let mut out = [0u8; BLAKE2B_256_LENGTH];
    out.copy_from_slice(state.finalize().as_bytes());
    Ok(out)
}

/// The 32-byte id an alias or NFT output receives from the output that
/// created it
pub fn resolve_id_from_output_id(output_id: &OutputId) -> [u8; BLAKE2B_256_LENGTH] {
    blake2b_256(&output_id.to_bytes())
}

pub fn alias_id_from_output_id(output_id: &OutputId) -> AliasId {
    AliasId::new(resolve_id_from_output_id(output_id))
}

pub fn nft_id_from_output_id(output_id: &OutputId) -> NftId {
    NftId::new(resolve_id_from_output_id(output_id))
}

/// Alias address of the controlling alias, then serial number and scheme kind
pub fn construct_token_id(
    alias_id: &AliasId,
    serial_number: u32,
    token_scheme: TokenSchemeKind,
) -> TokenId {
    let mut out = [0u8; TOKEN_ID_LENGTH];
    out[0] = AddressKind::Alias as u8;
    out[1..33].copy_from_slice(alias_id.as_bytes());
    out[33..37].copy_from_slice(&serial_number.to_le_bytes());
    out[37] = token_scheme as u8;
    TokenId::new(out)
}
