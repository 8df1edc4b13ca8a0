//! Signature family. Only Ed25519 exists: public key, then signature.

use super::require;
use crate::constants::{MIN_ED25519_SIGNATURE_LENGTH, MIN_SIGNATURE_LENGTH};
use crate::error::{ProtocolError, ProtocolResult};
use crate::stream::{ReadStream, WriteStream};
use tangle_types::{
    Ed25519PublicKey, Ed25519Signature, Ed25519SignatureBlock, Signature, SignatureKind,
};

pub fn deserialize_signature(stream: &mut ReadStream<'_>) -> ProtocolResult<Signature> {
    require(stream, "Signature", MIN_SIGNATURE_LENGTH)?;
    let tag = stream.peek_u8("signature.type")?;
    match SignatureKind::try_from(tag) {
        Ok(SignatureKind::Ed25519) => deserialize_ed25519_signature(stream).map(Signature::Ed25519),
        Err(_) => Err(ProtocolError::unrecognized("signature", tag)),
    }
}

pub fn serialize_signature(stream: &mut WriteStream, signature: &Signature) -> ProtocolResult<()> {
    match signature {
        Signature::Ed25519(block) => serialize_ed25519_signature(stream, block),
    }
    Ok(())
}

pub fn deserialize_ed25519_signature(
    stream: &mut ReadStream<'_>,
) -> ProtocolResult<Ed25519SignatureBlock> {
    require(stream, "Ed25519 Signature", MIN_ED25519_SIGNATURE_LENGTH)?;
    let tag = stream.read_u8("ed25519Signature.type")?;
    if tag != SignatureKind::Ed25519 as u8 {
        return Err(ProtocolError::type_mismatch("ed25519Signature", tag));
    }
    let public_key = Ed25519PublicKey::new(stream.read_array("ed25519Signature.publicKey")?);
    let signature = Ed25519Signature::new(stream.read_array("ed25519Signature.signature")?);
    Ok(Ed25519SignatureBlock {
        public_key,
        signature,
    })
}

pub fn serialize_ed25519_signature(stream: &mut WriteStream, block: &Ed25519SignatureBlock) {
    stream.write_u8(SignatureKind::Ed25519 as u8);
    stream.write_bytes(block.public_key.as_bytes());
    stream.write_bytes(block.signature.as_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_key_precedes_signature() {
        let signature = Signature::Ed25519(Ed25519SignatureBlock {
            public_key: Ed25519PublicKey::new([0x11; 32]),
            signature: Ed25519Signature::new([0x22; 64]),
        });
        let mut out = WriteStream::new();
        serialize_signature(&mut out, &signature).unwrap();
        let bytes = out.into_bytes();

        assert_eq!(bytes.len(), MIN_ED25519_SIGNATURE_LENGTH);
        assert_eq!(bytes[0], 0);
        assert_eq!(bytes[1], 0x11);
        assert_eq!(bytes[33], 0x22);
        assert_eq!(deserialize_signature(&mut ReadStream::new(&bytes)).unwrap(), signature);
    }

    #[test]
    fn test_unknown_signature_kind() {
        let mut data = vec![5u8];
        data.extend_from_slice(&[0u8; 96]);
        let err = deserialize_signature(&mut ReadStream::new(&data)).unwrap_err();
        assert_eq!(err, ProtocolError::unrecognized("signature", 5u8));
    }

    #[test]
    fn test_truncated_signature() {
        let data = [0u8; 50];
        let err = deserialize_signature(&mut ReadStream::new(&data)).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::minimum_length("Signature", 50, MIN_SIGNATURE_LENGTH)
        );
    }
}
