//! Storage deposit: the minimum amount an output must hold to pay for the
//! ledger space it occupies.

use crate::binary::output::serialize_output;
use crate::constants::{BLAKE2B_256_LENGTH, OUTPUT_ID_LENGTH, UINT32_SIZE};
use crate::error::ProtocolResult;
use crate::stream::WriteStream;
use tangle_config::RentStructure;
use tangle_types::{Address, BasicOutput, Output, UnlockCondition};

/// Confirming message id, milestone index and milestone timestamp stored
/// alongside every output
const OUTPUT_METADATA_LENGTH: u64 = (BLAKE2B_256_LENGTH + UINT32_SIZE + UINT32_SIZE) as u64;

/// Bytes an output occupies once weighted by the rent factors
pub fn weighted_bytes(serialized_length: usize, rent: &RentStructure) -> u64 {
    let factor_key = u64::from(rent.v_byte_factor_key);
    let factor_data = u64::from(rent.v_byte_factor_data);
    let offset = factor_key
        .saturating_mul(OUTPUT_ID_LENGTH as u64)
        .saturating_add(factor_data.saturating_mul(OUTPUT_METADATA_LENGTH));
    factor_data
        .saturating_mul(serialized_length as u64)
        .saturating_add(offset)
}

pub fn storage_deposit(output: &Output, rent: &RentStructure) -> ProtocolResult<u64> {
    let mut stream = WriteStream::new();
    serialize_output(&mut stream, output)?;
    Ok(u64::from(rent.v_byte_cost).saturating_mul(weighted_bytes(stream.length(), rent)))
}

/// Deposit of the smallest output `address` could own: a basic output with a
/// single address unlock condition
pub fn min_storage_deposit(address: &Address, rent: &RentStructure) -> ProtocolResult<u64> {
    let output = Output::Basic(BasicOutput {
        amount: 0,
        native_tokens: Vec::new(),
        unlock_conditions: vec![UnlockCondition::Address { address: *address }],
        features: Vec::new(),
    });
    storage_deposit(&output, rent)
}
