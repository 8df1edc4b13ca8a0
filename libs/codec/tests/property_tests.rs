//! Codec Property Tests
//!
//! Properties that must hold for any input: encoding is deterministic and
//! reversible, and decoding arbitrary bytes returns an error instead of
//! panicking.

use proptest::prelude::*;
use tangle_codec::{
    deserialize_message_bytes, serialize_message_bytes, validate_message, ReadStream, WriteStream,
};
use tangle_config::ProtocolParameters;
use tangle_types::{IndexationPayload, Message, MessageId, Payload, U256};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

prop_compose! {
    fn arb_parents()(
        ids in prop::collection::btree_set(any::<[u8; 32]>(), 1..=8),
    ) -> Vec<MessageId> {
        ids.into_iter().map(MessageId::new).collect()
    }
}

prop_compose! {
    fn arb_indexation()(
        index in prop::collection::vec(any::<u8>(), 1..=64),
        data in prop::collection::vec(any::<u8>(), 0..512),
    ) -> Payload {
        Payload::Indexation(IndexationPayload { index, data })
    }
}

proptest! {
    #[test]
    fn stream_primitives_round_trip(
        a in any::<u8>(),
        b in any::<u16>(),
        c in any::<u32>(),
        d in any::<u64>(),
        e in any::<[u8; 32]>(),
    ) {
        let mut writer = WriteStream::new();
        writer.write_u8(a);
        writer.write_u16(b);
        writer.write_u32(c);
        writer.write_u64(d);
        writer.write_u256(U256::from_little_endian(&e));
        let bytes = writer.into_bytes();
        prop_assert_eq!(bytes.len(), 1 + 2 + 4 + 8 + 32);

        let mut reader = ReadStream::new(&bytes);
        prop_assert_eq!(reader.read_u8("a").unwrap(), a);
        prop_assert_eq!(reader.read_u16("b").unwrap(), b);
        prop_assert_eq!(reader.read_u32("c").unwrap(), c);
        prop_assert_eq!(reader.read_u64("d").unwrap(), d);
        prop_assert_eq!(reader.read_u256("e").unwrap(), U256::from_little_endian(&e));
        prop_assert_eq!(reader.unused(), 0);
    }

    #[test]
    fn indexation_messages_round_trip(
        network_id in any::<u64>(),
        nonce in any::<u64>(),
        parents in arb_parents(),
        payload in prop::option::of(arb_indexation()),
    ) {
        let mut message = Message::new(network_id, parents, payload);
        message.nonce = nonce;
        let bytes = serialize_message_bytes(&message).unwrap();
        let decoded = deserialize_message_bytes(&bytes).unwrap();
        prop_assert_eq!(&decoded, &message);
        prop_assert_eq!(serialize_message_bytes(&decoded).unwrap(), bytes);
    }

    #[test]
    fn generated_messages_validate(parents in arb_parents(), payload in arb_indexation()) {
        let params = ProtocolParameters::default();
        let message = Message::new(params.network_id(), parents, Some(payload));
        let report = validate_message(&message, &params);
        prop_assert!(report.is_valid, "{}", report);
    }

    #[test]
    fn arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let _ = deserialize_message_bytes(&bytes);
    }
}

#[test]
fn truncated_prefixes_fail_cleanly() {
    init_tracing();
    let message = Message::new(
        5,
        vec![MessageId::new([1; 32])],
        Some(Payload::Indexation(IndexationPayload {
            index: vec![1, 2, 3],
            data: vec![4; 16],
        })),
    );
    let bytes = serialize_message_bytes(&message).unwrap();
    for end in 0..bytes.len() {
        assert!(deserialize_message_bytes(&bytes[..end]).is_err(), "prefix of {end} bytes decoded");
    }
}
