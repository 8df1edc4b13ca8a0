//! Address family: one-byte tag followed by a 32-byte body.

use super::require;
use crate::constants::{ADDRESS_BODY_LENGTH, MIN_ADDRESS_LENGTH};
use crate::error::{ProtocolError, ProtocolResult};
use crate::stream::{ReadStream, WriteStream};
use tangle_types::{Address, AddressKind, AliasId, BlsAddress, Ed25519Address, NftId};

pub fn deserialize_address(stream: &mut ReadStream<'_>) -> ProtocolResult<Address> {
    require(stream, "Address", MIN_ADDRESS_LENGTH)?;

    let tag = stream.peek_u8("address.type")?;
    match AddressKind::try_from(tag) {
        Ok(AddressKind::Ed25519) => deserialize_ed25519_address(stream).map(Address::Ed25519),
        Ok(AddressKind::Bls) => deserialize_bls_address(stream).map(Address::Bls),
        Ok(AddressKind::Alias) => deserialize_alias_address(stream).map(Address::Alias),
        Ok(AddressKind::Nft) => deserialize_nft_address(stream).map(Address::Nft),
        Err(_) => Err(ProtocolError::unrecognized("address", tag)),
    }
}

/// Reads the tag, checks it is `kind`, and returns the 32-byte body
fn read_address_body(
    stream: &mut ReadStream<'_>,
    kind: AddressKind,
    entity: &'static str,
    body_field: &str,
) -> ProtocolResult<[u8; ADDRESS_BODY_LENGTH]> {
    require(stream, entity, MIN_ADDRESS_LENGTH)?;
    let tag = stream.read_u8("address.type")?;
    if tag != kind as u8 {
        return Err(ProtocolError::type_mismatch(entity, tag));
    }
    stream.read_array(body_field)
}

pub fn deserialize_ed25519_address(stream: &mut ReadStream<'_>) -> ProtocolResult<Ed25519Address> {
    read_address_body(
        stream,
        AddressKind::Ed25519,
        "ed25519 address",
        "ed25519Address.pubKeyHash",
    )
    .map(Ed25519Address::new)
}

pub fn deserialize_bls_address(stream: &mut ReadStream<'_>) -> ProtocolResult<BlsAddress> {
    read_address_body(stream, AddressKind::Bls, "bls address", "blsAddress.key")
        .map(BlsAddress::new)
}

pub fn deserialize_alias_address(stream: &mut ReadStream<'_>) -> ProtocolResult<AliasId> {
    read_address_body(stream, AddressKind::Alias, "alias address", "aliasAddress.aliasId")
        .map(AliasId::new)
}

pub fn deserialize_nft_address(stream: &mut ReadStream<'_>) -> ProtocolResult<NftId> {
    read_address_body(stream, AddressKind::Nft, "nft address", "nftAddress.nftId").map(NftId::new)
}

pub fn serialize_address(stream: &mut WriteStream, address: &Address) -> ProtocolResult<()> {
    stream.write_u8(address.kind() as u8);
    stream.write_bytes(address.body());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ED25519_HEX: &str = "6920b176f613ec7be59e68fc68f597eb3393af80f74c7c3db78198147d5f1f92";

    #[test]
    fn test_ed25519_address_hex_layout() {
        let address = Address::Ed25519(Ed25519Address::from_hex(ED25519_HEX).unwrap());
        let mut out = WriteStream::new();
        serialize_address(&mut out, &address).unwrap();
        assert_eq!(out.final_hex(), format!("00{ED25519_HEX}"));

        let bytes = out.into_bytes();
        let mut input = ReadStream::new(&bytes);
        assert_eq!(deserialize_address(&mut input).unwrap(), address);
        assert_eq!(input.unused(), 0);
    }

    #[test]
    fn test_alias_and_nft_tags() {
        let alias = Address::Alias(AliasId::new([3u8; 32]));
        let nft = Address::Nft(NftId::new([4u8; 32]));
        let mut out = WriteStream::new();
        serialize_address(&mut out, &alias).unwrap();
        serialize_address(&mut out, &nft).unwrap();
        let bytes = out.into_bytes();
        assert_eq!(bytes[0], 8);
        assert_eq!(bytes[33], 16);

        let mut input = ReadStream::new(&bytes);
        assert_eq!(deserialize_address(&mut input).unwrap(), alias);
        assert_eq!(deserialize_address(&mut input).unwrap(), nft);
    }

    #[test]
    fn test_short_buffer_rejected() {
        let data = [0u8; 32];
        let err = deserialize_address(&mut ReadStream::new(&data)).unwrap_err();
        assert_eq!(err, ProtocolError::minimum_length("Address", 32, 33));
    }

    #[test]
    fn test_unrecognized_tag() {
        let mut data = [0u8; 33];
        data[0] = 2;
        let err = deserialize_address(&mut ReadStream::new(&data)).unwrap_err();
        assert_eq!(err, ProtocolError::unrecognized("address", 2u8));
        assert_eq!(err.to_string(), "Unrecognized address type 2");
    }

    #[test]
    fn test_variant_decoder_rechecks_tag() {
        let mut data = [0u8; 33];
        data[0] = AddressKind::Nft as u8;
        let err = deserialize_alias_address(&mut ReadStream::new(&data)).unwrap_err();
        assert_eq!(err, ProtocolError::type_mismatch("alias address", 16u8));
    }
}
