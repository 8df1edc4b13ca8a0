use super::expect_payload_tag;
use crate::binary::input::{deserialize_treasury_input, serialize_treasury_input};
use crate::binary::output::{deserialize_treasury_output, serialize_treasury_output};
use crate::binary::require;
use crate::constants::MIN_TREASURY_TRANSACTION_PAYLOAD_LENGTH;
use crate::error::ProtocolResult;
use crate::stream::{ReadStream, WriteStream};
use tangle_types::{PayloadKind, TreasuryTransactionPayload};

pub fn deserialize_treasury_transaction_payload(
    stream: &mut ReadStream<'_>,
) -> ProtocolResult<TreasuryTransactionPayload> {
    require(
        stream,
        "Treasury Transaction Payload",
        MIN_TREASURY_TRANSACTION_PAYLOAD_LENGTH,
    )?;
    expect_payload_tag(
        stream,
        PayloadKind::TreasuryTransaction,
        "treasuryTransactionPayload",
    )?;

    let input = deserialize_treasury_input(stream)?;
    let output = deserialize_treasury_output(stream)?;
    Ok(TreasuryTransactionPayload { input, output })
}

pub fn serialize_treasury_transaction_payload(
    stream: &mut WriteStream,
    payload: &TreasuryTransactionPayload,
) -> ProtocolResult<()> {
    stream.write_u32(PayloadKind::TreasuryTransaction as u32);
    serialize_treasury_input(stream, &payload.input)?;
    serialize_treasury_output(stream, &payload.output)
}
