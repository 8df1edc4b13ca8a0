use super::expect_payload_tag;
use crate::binary::essence::{deserialize_transaction_essence, serialize_transaction_essence};
use crate::binary::require;
use crate::binary::unlock_block::{deserialize_unlock_blocks, serialize_unlock_blocks};
use crate::constants::MIN_TRANSACTION_PAYLOAD_LENGTH;
use crate::error::ProtocolResult;
use crate::stream::{ReadStream, WriteStream};
use tangle_types::{PayloadKind, TransactionPayload};

pub fn deserialize_transaction_payload(
    stream: &mut ReadStream<'_>,
) -> ProtocolResult<TransactionPayload> {
    require(stream, "Transaction Payload", MIN_TRANSACTION_PAYLOAD_LENGTH)?;
    expect_payload_tag(stream, PayloadKind::Transaction, "transactionPayload")?;

    let essence = deserialize_transaction_essence(stream)?;
    let unlock_blocks = deserialize_unlock_blocks(stream)?;
    Ok(TransactionPayload {
        essence,
        unlock_blocks,
    })
}

pub fn serialize_transaction_payload(
    stream: &mut WriteStream,
    payload: &TransactionPayload,
) -> ProtocolResult<()> {
    stream.write_u32(PayloadKind::Transaction as u32);
    serialize_transaction_essence(stream, &payload.essence)?;
    serialize_unlock_blocks(stream, &payload.unlock_blocks)
}
