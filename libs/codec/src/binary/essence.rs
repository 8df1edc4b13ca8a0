//! Transaction essence: the signed body of a transaction payload.
//!
//! Inputs must be UTXO references, outputs must be one of the two
//! signature-locked kinds, and the only payload it may carry is an
//! indexation.

use super::input::{deserialize_utxo_input, serialize_inputs};
use super::output::{deserialize_output, serialize_outputs};
use super::payload::{check_embedded, deserialize_payload_of, serialize_payload};
use super::require;
use crate::constants::MIN_TRANSACTION_ESSENCE_LENGTH;
use crate::error::{ProtocolError, ProtocolResult};
use crate::stream::{ReadStream, WriteStream};
use tangle_types::{EssenceKind, Input, OutputKind, PayloadKind, TransactionEssence};

const CONTEXT: &str = "Transaction essence";

pub fn deserialize_transaction_essence(
    stream: &mut ReadStream<'_>,
) -> ProtocolResult<TransactionEssence> {
    require(stream, "Transaction Essence", MIN_TRANSACTION_ESSENCE_LENGTH)?;

    let tag = stream.read_u8("transactionEssence.type")?;
    if tag != EssenceKind::Regular as u8 {
        return Err(ProtocolError::unrecognized("transaction essence", tag));
    }

    let input_count = stream.read_u16("transactionEssence.numInputs")?;
    let inputs = (0..input_count)
        .map(|_| deserialize_utxo_input(stream).map(Input::Utxo))
        .collect::<ProtocolResult<Vec<_>>>()?;

    let output_count = stream.read_u16("transactionEssence.numOutputs")?;
    let mut outputs = Vec::with_capacity(usize::from(output_count));
    for _ in 0..output_count {
        let tag = stream.peek_u8("output.type")?;
        if !is_essence_output_tag(tag) {
            return Err(ProtocolError::unrecognized("transaction essence output", tag));
        }
        outputs.push(deserialize_output(stream)?);
    }

    let payload = deserialize_payload_of(stream, CONTEXT, PayloadKind::Indexation)?;

    Ok(TransactionEssence {
        inputs,
        outputs,
        payload: payload.map(Box::new),
    })
}

pub fn serialize_transaction_essence(
    stream: &mut WriteStream,
    essence: &TransactionEssence,
) -> ProtocolResult<()> {
    if let Some(input) = essence.inputs.iter().find(|i| !matches!(i, Input::Utxo(_))) {
        return Err(ProtocolError::invalid_value(
            "transactionEssence.inputs",
            format!("{} is not allowed in a transaction essence", input.kind().name()),
        ));
    }
    if let Some(output) = essence
        .outputs
        .iter()
        .find(|o| !is_essence_output_tag(o.kind() as u8))
    {
        return Err(ProtocolError::invalid_value(
            "transactionEssence.outputs",
            format!("{} output is not allowed in a transaction essence", output.kind().name()),
        ));
    }
    let payload = essence.payload.as_deref();
    check_embedded(CONTEXT, payload, PayloadKind::Indexation)?;

    stream.write_u8(essence.kind() as u8);
    serialize_inputs(stream, &essence.inputs)?;
    serialize_outputs(stream, &essence.outputs)?;
    serialize_payload(stream, payload)
}

fn is_essence_output_tag(tag: u8) -> bool {
    tag == OutputKind::SigLockedSingle as u8 || tag == OutputKind::SigLockedDustAllowance as u8
}
