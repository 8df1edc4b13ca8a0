//! Native token balances: u8 count, then token id + U256 amount per entry.

use super::{count_u8, require};
use crate::constants::{MAX_NATIVE_TOKEN_COUNT, MIN_NATIVE_TOKENS_LENGTH, NATIVE_TOKEN_LENGTH};
use crate::error::ProtocolResult;
use crate::stream::{ReadStream, WriteStream};
use tangle_types::{NativeToken, TokenId};

pub fn deserialize_native_tokens(stream: &mut ReadStream<'_>) -> ProtocolResult<Vec<NativeToken>> {
    require(stream, "Native Tokens", MIN_NATIVE_TOKENS_LENGTH)?;
    let count = stream.read_u8("nativeTokens.numNativeTokens")?;
    (0..count).map(|_| deserialize_native_token(stream)).collect()
}

pub fn serialize_native_tokens(
    stream: &mut WriteStream,
    tokens: &[NativeToken],
) -> ProtocolResult<()> {
    let count = count_u8("native tokens", tokens.len(), 0, MAX_NATIVE_TOKEN_COUNT)?;
    stream.write_u8(count);
    for token in tokens {
        serialize_native_token(stream, token);
    }
    Ok(())
}

pub fn deserialize_native_token(stream: &mut ReadStream<'_>) -> ProtocolResult<NativeToken> {
    require(stream, "Native Token", NATIVE_TOKEN_LENGTH)?;
    let id = TokenId::new(stream.read_array("nativeToken.id")?);
    let amount = stream.read_u256("nativeToken.amount")?;
    Ok(NativeToken { id, amount })
}

pub fn serialize_native_token(stream: &mut WriteStream, token: &NativeToken) {
    stream.write_bytes(token.id.as_bytes());
    stream.write_u256(token.amount);
}
