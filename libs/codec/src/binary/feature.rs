//! Feature family: Sender, Issuer, Metadata and Tag.

use super::address::{deserialize_address, serialize_address};
use super::{count_u16, count_u8, require};
use crate::constants::{
    MAX_FEATURE_COUNT, MAX_METADATA_LENGTH, MAX_TAG_LENGTH, MIN_ADDRESS_FEATURE_LENGTH,
    MIN_FEATURES_LENGTH, MIN_FEATURE_LENGTH, MIN_METADATA_FEATURE_LENGTH, MIN_TAG_FEATURE_LENGTH,
};
use crate::error::{ProtocolError, ProtocolResult};
use crate::stream::{ReadStream, WriteStream};
use tangle_types::{Feature, FeatureKind};

pub fn deserialize_features(stream: &mut ReadStream<'_>) -> ProtocolResult<Vec<Feature>> {
    require(stream, "Features", MIN_FEATURES_LENGTH)?;
    let count = stream.read_u8("features.numFeatures")?;
    (0..count).map(|_| deserialize_feature(stream)).collect()
}

pub fn serialize_features(stream: &mut WriteStream, features: &[Feature]) -> ProtocolResult<()> {
    let count = count_u8("features", features.len(), 0, MAX_FEATURE_COUNT)?;
    stream.write_u8(count);
    for feature in features {
        serialize_feature(stream, feature)?;
    }
    Ok(())
}

pub fn deserialize_feature(stream: &mut ReadStream<'_>) -> ProtocolResult<Feature> {
    require(stream, "Feature", MIN_FEATURE_LENGTH)?;

    let tag = stream.peek_u8("feature.type")?;
    let kind =
        FeatureKind::try_from(tag).map_err(|_| ProtocolError::unrecognized("feature", tag))?;

    let min = match kind {
        FeatureKind::Sender | FeatureKind::Issuer => MIN_ADDRESS_FEATURE_LENGTH,
        FeatureKind::Metadata => MIN_METADATA_FEATURE_LENGTH,
        FeatureKind::Tag => MIN_TAG_FEATURE_LENGTH,
    };
    require(stream, kind.name(), min)?;
    expect_tag(stream, kind)?;

    let feature = match kind {
        FeatureKind::Sender => Feature::Sender {
            address: deserialize_address(stream)?,
        },
        FeatureKind::Issuer => Feature::Issuer {
            address: deserialize_address(stream)?,
        },
        FeatureKind::Metadata => {
            let length = stream.read_u16("metadataFeature.length")?;
            let data = stream.read_bytes("metadataFeature.data", usize::from(length))?;
            Feature::Metadata {
                data: data.to_vec(),
            }
        }
        FeatureKind::Tag => {
            let length = stream.read_u8("tagFeature.length")?;
            let tag = stream.read_bytes("tagFeature.tag", usize::from(length))?;
            Feature::Tag { tag: tag.to_vec() }
        }
    };
    Ok(feature)
}

pub fn serialize_feature(stream: &mut WriteStream, feature: &Feature) -> ProtocolResult<()> {
    stream.write_u8(feature.kind() as u8);
    match feature {
        Feature::Sender { address } | Feature::Issuer { address } => {
            serialize_address(stream, address)
        }
        Feature::Metadata { data } => {
            let length = count_u16("metadata", data.len(), 1, MAX_METADATA_LENGTH)?;
            stream.write_u16(length);
            stream.write_bytes(data);
            Ok(())
        }
        Feature::Tag { tag } => {
            let length = count_u8("tag", tag.len(), 1, MAX_TAG_LENGTH)?;
            stream.write_u8(length);
            stream.write_bytes(tag);
            Ok(())
        }
    }
}

/// Consume the tag and fail unless it is `kind`
fn expect_tag(stream: &mut ReadStream<'_>, kind: FeatureKind) -> ProtocolResult<()> {
    let tag = stream.read_u8("feature.type")?;
    if tag != kind as u8 {
        return Err(ProtocolError::type_mismatch(kind.name(), tag));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tangle_types::{Address, Ed25519Address};

    #[test]
    fn test_features_decode_back() {
        let features = vec![
            Feature::Sender {
                address: Address::Ed25519(Ed25519Address::new([7u8; 32])),
            },
            Feature::Metadata {
                data: b"hello".to_vec(),
            },
            Feature::Tag {
                tag: b"tangle".to_vec(),
            },
        ];
        let mut out = WriteStream::new();
        serialize_features(&mut out, &features).unwrap();
        let bytes = out.into_bytes();

        let mut input = ReadStream::new(&bytes);
        assert_eq!(deserialize_features(&mut input).unwrap(), features);
        assert_eq!(input.unused(), 0);
    }

    #[test]
    fn test_metadata_and_tag_length_prefixes() {
        let mut out = WriteStream::new();
        serialize_feature(&mut out, &Feature::Metadata { data: vec![0xaa] }).unwrap();
        assert_eq!(out.final_hex(), "020100aa");

        let mut out = WriteStream::new();
        serialize_feature(&mut out, &Feature::Tag { tag: vec![0xbb, 0xcc] }).unwrap();
        assert_eq!(out.final_hex(), "0302bbcc");
    }

    #[test]
    fn test_empty_metadata_rejected() {
        let err = serialize_feature(&mut WriteStream::new(), &Feature::Metadata { data: vec![] })
            .unwrap_err();
        assert_eq!(
            err,
            ProtocolError::count_out_of_range("metadata", 0, 1, MAX_METADATA_LENGTH)
        );
    }

    #[test]
    fn test_too_many_features() {
        let features = vec![Feature::Tag { tag: vec![1] }; MAX_FEATURE_COUNT + 1];
        assert!(serialize_features(&mut WriteStream::new(), &features).is_err());
    }

    #[test]
    fn test_declared_metadata_longer_than_buffer() {
        let data = [FeatureKind::Metadata as u8, 0x10, 0x00, 0x01];
        let err = deserialize_feature(&mut ReadStream::new(&data)).unwrap_err();
        assert!(err.is_short_buffer());
    }

    #[test]
    fn test_variant_tag_rechecked() {
        let data = [0u8, 0, 0];
        let mut input = ReadStream::new(&data);
        assert_eq!(
            expect_tag(&mut input, FeatureKind::Tag),
            Err(ProtocolError::type_mismatch("Tag Feature", 0u8))
        );

        let mut input = ReadStream::new(&data);
        assert!(expect_tag(&mut input, FeatureKind::Sender).is_ok());
        assert_eq!(input.read_index(), 1);
    }
}
