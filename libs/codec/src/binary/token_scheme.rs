//! Foundry token schemes.

use super::require;
use crate::constants::MIN_SIMPLE_TOKEN_SCHEME_LENGTH;
use crate::error::{ProtocolError, ProtocolResult};
use crate::stream::{ReadStream, WriteStream};
use tangle_types::{SimpleTokenScheme, TokenScheme, TokenSchemeKind};

pub fn deserialize_token_scheme(stream: &mut ReadStream<'_>) -> ProtocolResult<TokenScheme> {
    require(stream, "Token Scheme", MIN_SIMPLE_TOKEN_SCHEME_LENGTH)?;

    let tag = stream.peek_u8("tokenScheme.type")?;
    match TokenSchemeKind::try_from(tag) {
        Ok(TokenSchemeKind::Simple) => {
            deserialize_simple_token_scheme(stream).map(TokenScheme::Simple)
        }
        Err(_) => Err(ProtocolError::unrecognized("token scheme", tag)),
    }
}

pub fn serialize_token_scheme(
    stream: &mut WriteStream,
    scheme: &TokenScheme,
) -> ProtocolResult<()> {
    match scheme {
        TokenScheme::Simple(simple) => serialize_simple_token_scheme(stream, simple),
    }
}

pub fn deserialize_simple_token_scheme(
    stream: &mut ReadStream<'_>,
) -> ProtocolResult<SimpleTokenScheme> {
    require(stream, "Simple Token Scheme", MIN_SIMPLE_TOKEN_SCHEME_LENGTH)?;

    let tag = stream.read_u8("simpleTokenScheme.type")?;
    if tag != TokenSchemeKind::Simple as u8 {
        return Err(ProtocolError::type_mismatch("simpleTokenScheme", tag));
    }
    Ok(SimpleTokenScheme {
        minted_tokens: stream.read_u256("simpleTokenScheme.mintedTokens")?,
        melted_tokens: stream.read_u256("simpleTokenScheme.meltedTokens")?,
        maximum_supply: stream.read_u256("simpleTokenScheme.maximumSupply")?,
    })
}

pub fn serialize_simple_token_scheme(
    stream: &mut WriteStream,
    scheme: &SimpleTokenScheme,
) -> ProtocolResult<()> {
    stream.write_u8(TokenSchemeKind::Simple as u8);
    stream.write_u256(scheme.minted_tokens);
    stream.write_u256(scheme.melted_tokens);
    stream.write_u256(scheme.maximum_supply);
    Ok(())
}
