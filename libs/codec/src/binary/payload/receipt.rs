//! Receipt payload and the migrated funds it lists.

use super::{deserialize_payload_of, expect_payload_tag, serialize_payload};
use crate::binary::address::{deserialize_address, serialize_address};
use crate::binary::{check_sorted_unique, count_u16, require};
use crate::constants::{
    MAX_FUNDS_COUNT, MIN_MIGRATED_FUNDS_LENGTH, MIN_RECEIPT_PAYLOAD_LENGTH, UINT16_SIZE,
};
use crate::error::{ProtocolError, ProtocolResult};
use crate::stream::{ReadStream, WriteStream};
use std::collections::BTreeSet;
use tangle_types::{MigratedFunds, PayloadKind, ReceiptPayload, TailTransactionHash};

const CONTEXT: &str = "Receipt";

pub fn deserialize_receipt_payload(stream: &mut ReadStream<'_>) -> ProtocolResult<ReceiptPayload> {
    require(stream, "Receipt Payload", MIN_RECEIPT_PAYLOAD_LENGTH)?;
    expect_payload_tag(stream, PayloadKind::Receipt, "receiptPayload")?;

    let migrated_at = stream.read_u32("receiptPayload.migratedAt")?;
    let is_final = stream.read_bool("receiptPayload.final")?;
    let funds = deserialize_migrated_funds(stream)?;

    let Some(transaction) =
        deserialize_payload_of(stream, CONTEXT, PayloadKind::TreasuryTransaction)?
    else {
        return Err(ProtocolError::invalid_value(
            "receiptPayload.transaction",
            "a receipt must embed a treasury transaction",
        ));
    };

    Ok(ReceiptPayload {
        migrated_at,
        is_final,
        funds,
        transaction: Box::new(transaction),
    })
}

pub fn serialize_receipt_payload(
    stream: &mut WriteStream,
    payload: &ReceiptPayload,
) -> ProtocolResult<()> {
    if payload.transaction.kind() != PayloadKind::TreasuryTransaction {
        return Err(ProtocolError::PayloadNotAllowed {
            context: CONTEXT,
            kind: payload.transaction.kind().name(),
        });
    }

    stream.write_u32(PayloadKind::Receipt as u32);
    stream.write_u32(payload.migrated_at);
    stream.write_bool(payload.is_final);
    serialize_migrated_funds(stream, &payload.funds)?;
    serialize_payload(stream, Some(payload.transaction.as_ref()))
}

pub fn deserialize_migrated_funds(
    stream: &mut ReadStream<'_>,
) -> ProtocolResult<Vec<MigratedFunds>> {
    require(stream, "Migrated Funds", UINT16_SIZE)?;
    let count = stream.read_u16("receiptPayload.numFunds")?;
    (0..count).map(|_| deserialize_migrated_funds_entry(stream)).collect()
}

/// Entries must be sorted by their serialized bytes, one per tail hash
pub fn serialize_migrated_funds(
    stream: &mut WriteStream,
    funds: &[MigratedFunds],
) -> ProtocolResult<()> {
    let count = count_u16("funds", funds.len(), 0, MAX_FUNDS_COUNT)?;

    let tails: BTreeSet<&TailTransactionHash> =
        funds.iter().map(|f| &f.tail_transaction_hash).collect();
    if tails.len() != funds.len() {
        return Err(ProtocolError::Duplicate { entity: "funds" });
    }

    let mut encoded = Vec::with_capacity(funds.len());
    for entry in funds {
        let mut scratch = WriteStream::new();
        serialize_migrated_funds_entry(&mut scratch, entry)?;
        encoded.push(scratch.into_bytes());
    }
    check_sorted_unique("funds", &encoded)?;

    stream.write_u16(count);
    for bytes in &encoded {
        stream.write_bytes(bytes);
    }
    Ok(())
}

fn deserialize_migrated_funds_entry(stream: &mut ReadStream<'_>) -> ProtocolResult<MigratedFunds> {
    require(stream, "Migrated Funds", MIN_MIGRATED_FUNDS_LENGTH)?;
    let tail_transaction_hash =
        TailTransactionHash::new(stream.read_array("migratedFunds.tailTransactionHash")?);
    let address = deserialize_address(stream)?;
    let deposit = stream.read_u64("migratedFunds.deposit")?;
    Ok(MigratedFunds {
        tail_transaction_hash,
        address,
        deposit,
    })
}

fn serialize_migrated_funds_entry(
    stream: &mut WriteStream,
    entry: &MigratedFunds,
) -> ProtocolResult<()> {
    stream.write_bytes(entry.tail_transaction_hash.as_bytes());
    serialize_address(stream, &entry.address)?;
    stream.write_u64(entry.deposit);
    Ok(())
}
