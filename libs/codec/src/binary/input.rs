//! Input family: UTXO references and treasury inputs.

use super::{check_sorted_unique, count_u16, require};
use crate::constants::{
    MAX_INPUT_COUNT, MIN_INPUT_COUNT, MIN_INPUT_LENGTH, MIN_TREASURY_INPUT_LENGTH,
    MIN_UTXO_INPUT_LENGTH,
};
use crate::error::{ProtocolError, ProtocolResult};
use crate::stream::{ReadStream, WriteStream};
use tangle_types::{Input, InputKind, MilestoneId, TransactionId, TreasuryInput, UtxoInput};

/// Count-prefixed input list; trusts the count and decodes element by element
pub fn deserialize_inputs(stream: &mut ReadStream<'_>) -> ProtocolResult<Vec<Input>> {
    let count = stream.read_u16("inputs.numInputs")?;
    (0..count).map(|_| deserialize_input(stream)).collect()
}

/// Inputs must already be sorted by their serialized bytes, with no repeats
pub fn serialize_inputs(stream: &mut WriteStream, inputs: &[Input]) -> ProtocolResult<()> {
    let count = count_u16("inputs", inputs.len(), MIN_INPUT_COUNT, MAX_INPUT_COUNT)?;

    let mut encoded = Vec::with_capacity(inputs.len());
    for input in inputs {
        let mut scratch = WriteStream::new();
        serialize_input(&mut scratch, input)?;
        encoded.push(scratch.into_bytes());
    }
    check_sorted_unique("inputs", &encoded)?;

    stream.write_u16(count);
    for bytes in &encoded {
        stream.write_bytes(bytes);
    }
    Ok(())
}

pub fn deserialize_input(stream: &mut ReadStream<'_>) -> ProtocolResult<Input> {
    require(stream, "Input", MIN_INPUT_LENGTH)?;

    let tag = stream.peek_u8("input.type")?;
    match InputKind::try_from(tag) {
        Ok(InputKind::Utxo) => deserialize_utxo_input(stream).map(Input::Utxo),
        Ok(InputKind::Treasury) => deserialize_treasury_input(stream).map(Input::Treasury),
        Err(_) => Err(ProtocolError::unrecognized("input", tag)),
    }
}

pub fn serialize_input(stream: &mut WriteStream, input: &Input) -> ProtocolResult<()> {
    match input {
        Input::Utxo(utxo) => serialize_utxo_input(stream, utxo),
        Input::Treasury(treasury) => serialize_treasury_input(stream, treasury),
    }
}

pub fn deserialize_utxo_input(stream: &mut ReadStream<'_>) -> ProtocolResult<UtxoInput> {
    require(stream, "UTXO Input", MIN_UTXO_INPUT_LENGTH)?;

    let tag = stream.read_u8("utxoInput.type")?;
    if tag != InputKind::Utxo as u8 {
        return Err(ProtocolError::type_mismatch("utxoInput", tag));
    }
    let transaction_id = TransactionId::new(stream.read_array("utxoInput.transactionId")?);
    let transaction_output_index = stream.read_u16("utxoInput.transactionOutputIndex")?;

    Ok(UtxoInput::new(transaction_id, transaction_output_index))
}

pub fn serialize_utxo_input(stream: &mut WriteStream, input: &UtxoInput) -> ProtocolResult<()> {
    stream.write_u8(InputKind::Utxo as u8);
    stream.write_bytes(input.transaction_id.as_bytes());
    stream.write_u16(input.transaction_output_index);
    Ok(())
}

pub fn deserialize_treasury_input(stream: &mut ReadStream<'_>) -> ProtocolResult<TreasuryInput> {
    require(stream, "Treasury Input", MIN_TREASURY_INPUT_LENGTH)?;

    let tag = stream.read_u8("treasuryInput.type")?;
    if tag != InputKind::Treasury as u8 {
        return Err(ProtocolError::type_mismatch("treasuryInput", tag));
    }
    let milestone_id = MilestoneId::new(stream.read_array("treasuryInput.milestoneId")?);

    Ok(TreasuryInput { milestone_id })
}

pub fn serialize_treasury_input(
    stream: &mut WriteStream,
    input: &TreasuryInput,
) -> ProtocolResult<()> {
    stream.write_u8(InputKind::Treasury as u8);
    stream.write_bytes(input.milestone_id.as_bytes());
    Ok(())
}
