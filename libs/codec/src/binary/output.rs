//! # Output Family
//!
//! Seven variants share a one-byte tag and a u64 amount. The two
//! signature-locked kinds and the treasury output are fixed size; Basic,
//! Alias, Foundry and NFT outputs nest native tokens, unlock conditions and
//! feature lists, in that order, around their own identity fields.
//!
//! ```text
//! Basic    tag amount tokens                          conditions features
//! Alias    tag amount tokens aliasId index meta ctr   conditions features immutable
//! Foundry  tag amount tokens serial scheme            conditions features immutable
//! NFT      tag amount tokens nftId                    conditions features immutable
//! ```

use super::address::{deserialize_address, serialize_address};
use super::feature::{deserialize_features, serialize_features};
use super::native_token::{deserialize_native_tokens, serialize_native_tokens};
use super::token_scheme::{deserialize_token_scheme, serialize_token_scheme};
use super::unlock_condition::{deserialize_unlock_conditions, serialize_unlock_conditions};
use super::{check_count, count_u16, require};
use crate::constants::{
    MAX_NATIVE_TOKEN_COUNT, MAX_OUTPUT_COUNT, MIN_ALIAS_OUTPUT_LENGTH, MIN_BASIC_OUTPUT_LENGTH, MIN_FOUNDRY_OUTPUT_LENGTH,
    MIN_NFT_OUTPUT_LENGTH, MIN_OUTPUT_COUNT, MIN_OUTPUT_LENGTH, MIN_SIG_LOCKED_OUTPUT_LENGTH,
    MIN_TREASURY_OUTPUT_LENGTH, UINT16_SIZE,
};
use crate::error::{ProtocolError, ProtocolResult};
use crate::stream::{ReadStream, WriteStream};
use tangle_types::{
    AliasId, AliasOutput, BasicOutput, FoundryOutput, NftId, NftOutput, Output, OutputKind,
    SigLockedOutput, TreasuryOutput,
};

pub fn deserialize_outputs(stream: &mut ReadStream<'_>) -> ProtocolResult<Vec<Output>> {
    require(stream, "Outputs", UINT16_SIZE)?;
    let count = stream.read_u16("outputs.numOutputs")?;
    (0..count).map(|_| deserialize_output(stream)).collect()
}

/// The native token ceiling applies to the sum over all outputs
pub fn serialize_outputs(stream: &mut WriteStream, outputs: &[Output]) -> ProtocolResult<()> {
    let count = count_u16("outputs", outputs.len(), MIN_OUTPUT_COUNT, MAX_OUTPUT_COUNT)?;
    let token_count: usize = outputs.iter().map(|o| o.native_tokens().len()).sum();
    check_count("native tokens", token_count, 0, MAX_NATIVE_TOKEN_COUNT)?;
    stream.write_u16(count);
    for output in outputs {
        serialize_output(stream, output)?;
    }
    Ok(())
}

pub fn deserialize_output(stream: &mut ReadStream<'_>) -> ProtocolResult<Output> {
    require(stream, "Output", MIN_OUTPUT_LENGTH)?;

    let tag = stream.peek_u8("output.type")?;
    let kind = OutputKind::try_from(tag).map_err(|_| ProtocolError::unrecognized("output", tag))?;
    match kind {
        OutputKind::SigLockedSingle | OutputKind::SigLockedDustAllowance => {
            let output = deserialize_sig_locked_output(stream, kind)?;
            Ok(if kind == OutputKind::SigLockedSingle {
                Output::SigLockedSingle(output)
            } else {
                Output::SigLockedDustAllowance(output)
            })
        }
        OutputKind::Treasury => deserialize_treasury_output(stream).map(Output::Treasury),
        OutputKind::Basic => deserialize_basic_output(stream).map(Output::Basic),
        OutputKind::Alias => deserialize_alias_output(stream).map(Output::Alias),
        OutputKind::Foundry => deserialize_foundry_output(stream).map(Output::Foundry),
        OutputKind::Nft => deserialize_nft_output(stream).map(Output::Nft),
    }
}

pub fn serialize_output(stream: &mut WriteStream, output: &Output) -> ProtocolResult<()> {
    match output {
        Output::SigLockedSingle(o) => {
            serialize_sig_locked_output(stream, OutputKind::SigLockedSingle, o)
        }
        Output::SigLockedDustAllowance(o) => {
            serialize_sig_locked_output(stream, OutputKind::SigLockedDustAllowance, o)
        }
        Output::Treasury(o) => serialize_treasury_output(stream, o),
        Output::Basic(o) => serialize_basic_output(stream, o),
        Output::Alias(o) => serialize_alias_output(stream, o),
        Output::Foundry(o) => serialize_foundry_output(stream, o),
        Output::Nft(o) => serialize_nft_output(stream, o),
    }
}

/// Consume the tag and fail unless it is `kind`
fn expect_tag(
    stream: &mut ReadStream<'_>,
    kind: OutputKind,
    entity: &'static str,
) -> ProtocolResult<()> {
    let tag = stream.read_u8("output.type")?;
    if tag != kind as u8 {
        return Err(ProtocolError::type_mismatch(entity, tag));
    }
    Ok(())
}

/// Shared by the single and dust allowance outputs; `kind` selects which
pub fn deserialize_sig_locked_output(
    stream: &mut ReadStream<'_>,
    kind: OutputKind,
) -> ProtocolResult<SigLockedOutput> {
    let entity = match kind {
        OutputKind::SigLockedDustAllowance => "sigLockedDustAllowanceOutput",
        _ => "sigLockedSingleOutput",
    };
    require(stream, kind.name(), MIN_SIG_LOCKED_OUTPUT_LENGTH)?;
    expect_tag(stream, kind, entity)?;

    let address = deserialize_address(stream)?;
    let amount = stream.read_u64("sigLockedOutput.amount")?;
    Ok(SigLockedOutput { address, amount })
}

pub fn serialize_sig_locked_output(
    stream: &mut WriteStream,
    kind: OutputKind,
    output: &SigLockedOutput,
) -> ProtocolResult<()> {
    stream.write_u8(kind as u8);
    serialize_address(stream, &output.address)?;
    stream.write_u64(output.amount);
    Ok(())
}

pub fn deserialize_treasury_output(stream: &mut ReadStream<'_>) -> ProtocolResult<TreasuryOutput> {
    require(stream, "Treasury Output", MIN_TREASURY_OUTPUT_LENGTH)?;
    expect_tag(stream, OutputKind::Treasury, "treasuryOutput")?;
    Ok(TreasuryOutput {
        amount: stream.read_u64("treasuryOutput.amount")?,
    })
}

pub fn serialize_treasury_output(
    stream: &mut WriteStream,
    output: &TreasuryOutput,
) -> ProtocolResult<()> {
    stream.write_u8(OutputKind::Treasury as u8);
    stream.write_u64(output.amount);
    Ok(())
}

pub fn deserialize_basic_output(stream: &mut ReadStream<'_>) -> ProtocolResult<BasicOutput> {
    require(stream, "Basic Output", MIN_BASIC_OUTPUT_LENGTH)?;
    expect_tag(stream, OutputKind::Basic, "basicOutput")?;

    Ok(BasicOutput {
        amount: stream.read_u64("basicOutput.amount")?,
        native_tokens: deserialize_native_tokens(stream)?,
        unlock_conditions: deserialize_unlock_conditions(stream)?,
        features: deserialize_features(stream)?,
    })
}

pub fn serialize_basic_output(
    stream: &mut WriteStream,
    output: &BasicOutput,
) -> ProtocolResult<()> {
    stream.write_u8(OutputKind::Basic as u8);
    stream.write_u64(output.amount);
    serialize_native_tokens(stream, &output.native_tokens)?;
    serialize_unlock_conditions(stream, &output.unlock_conditions)?;
    serialize_features(stream, &output.features)
}

pub fn deserialize_alias_output(stream: &mut ReadStream<'_>) -> ProtocolResult<AliasOutput> {
    require(stream, "Alias Output", MIN_ALIAS_OUTPUT_LENGTH)?;
    expect_tag(stream, OutputKind::Alias, "aliasOutput")?;

    let amount = stream.read_u64("aliasOutput.amount")?;
    let native_tokens = deserialize_native_tokens(stream)?;
    let alias_id = AliasId::new(stream.read_array("aliasOutput.aliasId")?);
    let state_index = stream.read_u32("aliasOutput.stateIndex")?;
    let metadata_length = stream.read_u16("aliasOutput.stateMetadataLength")?;
    let state_metadata = stream
        .read_bytes("aliasOutput.stateMetadata", usize::from(metadata_length))?
        .to_vec();
    let foundry_counter = stream.read_u32("aliasOutput.foundryCounter")?;

    Ok(AliasOutput {
        amount,
        native_tokens,
        alias_id,
        state_index,
        state_metadata,
        foundry_counter,
        unlock_conditions: deserialize_unlock_conditions(stream)?,
        features: deserialize_features(stream)?,
        immutable_features: deserialize_features(stream)?,
    })
}

pub fn serialize_alias_output(
    stream: &mut WriteStream,
    output: &AliasOutput,
) -> ProtocolResult<()> {
    stream.write_u8(OutputKind::Alias as u8);
    stream.write_u64(output.amount);
    serialize_native_tokens(stream, &output.native_tokens)?;
    stream.write_bytes(output.alias_id.as_bytes());
    stream.write_u32(output.state_index);
    let metadata_length = count_u16(
        "state metadata",
        output.state_metadata.len(),
        0,
        usize::from(u16::MAX),
    )?;
    stream.write_u16(metadata_length);
    stream.write_bytes(&output.state_metadata);
    stream.write_u32(output.foundry_counter);
    serialize_unlock_conditions(stream, &output.unlock_conditions)?;
    serialize_features(stream, &output.features)?;
    serialize_features(stream, &output.immutable_features)
}

pub fn deserialize_foundry_output(stream: &mut ReadStream<'_>) -> ProtocolResult<FoundryOutput> {
    require(stream, "Foundry Output", MIN_FOUNDRY_OUTPUT_LENGTH)?;
    expect_tag(stream, OutputKind::Foundry, "foundryOutput")?;

    Ok(FoundryOutput {
        amount: stream.read_u64("foundryOutput.amount")?,
        native_tokens: deserialize_native_tokens(stream)?,
        serial_number: stream.read_u32("foundryOutput.serialNumber")?,
        token_scheme: deserialize_token_scheme(stream)?,
        unlock_conditions: deserialize_unlock_conditions(stream)?,
        features: deserialize_features(stream)?,
        immutable_features: deserialize_features(stream)?,
    })
}

pub fn serialize_foundry_output(
    stream: &mut WriteStream,
    output: &FoundryOutput,
) -> ProtocolResult<()> {
    stream.write_u8(OutputKind::Foundry as u8);
    stream.write_u64(output.amount);
    serialize_native_tokens(stream, &output.native_tokens)?;
    stream.write_u32(output.serial_number);
    serialize_token_scheme(stream, &output.token_scheme)?;
    serialize_unlock_conditions(stream, &output.unlock_conditions)?;
    serialize_features(stream, &output.features)?;
    serialize_features(stream, &output.immutable_features)
}

pub fn deserialize_nft_output(stream: &mut ReadStream<'_>) -> ProtocolResult<NftOutput> {
    require(stream, "NFT Output", MIN_NFT_OUTPUT_LENGTH)?;
    expect_tag(stream, OutputKind::Nft, "nftOutput")?;

    Ok(NftOutput {
        amount: stream.read_u64("nftOutput.amount")?,
        native_tokens: deserialize_native_tokens(stream)?,
        nft_id: NftId::new(stream.read_array("nftOutput.nftId")?),
        unlock_conditions: deserialize_unlock_conditions(stream)?,
        features: deserialize_features(stream)?,
        immutable_features: deserialize_features(stream)?,
    })
}

pub fn serialize_nft_output(stream: &mut WriteStream, output: &NftOutput) -> ProtocolResult<()> {
    stream.write_u8(OutputKind::Nft as u8);
    stream.write_u64(output.amount);
    serialize_native_tokens(stream, &output.native_tokens)?;
    stream.write_bytes(output.nft_id.as_bytes());
    serialize_unlock_conditions(stream, &output.unlock_conditions)?;
    serialize_features(stream, &output.features)?;
    serialize_features(stream, &output.immutable_features)
}
