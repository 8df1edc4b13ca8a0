//! Encode/decode throughput for representative messages
//!
//! The transaction message is the common hot path; the milestone carries a
//! receipt and exercises the deepest payload nesting.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tangle_codec::validation::validate_message;
use tangle_codec::{deserialize_message_bytes, message_id, serialize_message_bytes};
use tangle_config::ProtocolParameters;
use tangle_types::{
    Address, Ed25519Address, Ed25519PublicKey, Ed25519Signature, Ed25519SignatureBlock,
    IndexationPayload, Input, Message, MessageId, Output, Payload, SigLockedOutput, Signature,
    TransactionEssence, TransactionId, TransactionPayload, UnlockBlock, UtxoInput,
};

/// Transaction message with `inputs` inputs sharing one signature
fn transaction_message(inputs: u16) -> Message {
    let params = ProtocolParameters::default();
    let essence = TransactionEssence {
        inputs: (0..inputs)
            .map(|i| Input::Utxo(UtxoInput::new(TransactionId::new([1; 32]), i)))
            .collect(),
        outputs: vec![Output::SigLockedSingle(SigLockedOutput {
            address: Address::Ed25519(Ed25519Address::new([2; 32])),
            amount: 10_000_000,
        })],
        payload: Some(Box::new(Payload::Indexation(IndexationPayload {
            index: b"bench".to_vec(),
            data: vec![0xab; 64],
        }))),
    };
    let mut unlock_blocks = vec![UnlockBlock::Signature {
        signature: Signature::Ed25519(Ed25519SignatureBlock {
            public_key: Ed25519PublicKey::new([3; 32]),
            signature: Ed25519Signature::new([4; 64]),
        }),
    }];
    unlock_blocks.extend((1..inputs).map(|_| UnlockBlock::Reference { reference: 0 }));

    Message::new(
        params.network_id(),
        (1..=4u8).map(|i| MessageId::new([i; 32])).collect(),
        Some(Payload::Transaction(TransactionPayload {
            essence,
            unlock_blocks,
        })),
    )
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for inputs in [1u16, 16, 127] {
        let message = transaction_message(inputs);
        group.bench_function(format!("transaction_{inputs}_inputs"), |b| {
            b.iter(|| serialize_message_bytes(black_box(&message)))
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for inputs in [1u16, 16, 127] {
        let bytes = match serialize_message_bytes(&transaction_message(inputs)) {
            Ok(bytes) => bytes,
            Err(e) => panic!("bench fixture failed to encode: {e}"),
        };
        group.bench_function(format!("transaction_{inputs}_inputs"), |b| {
            b.iter(|| deserialize_message_bytes(black_box(&bytes)))
        });
    }
    group.finish();
}

fn bench_hash_and_validate(c: &mut Criterion) {
    let params = ProtocolParameters::default();
    let message = transaction_message(16);

    c.bench_function("message_id", |b| b.iter(|| message_id(black_box(&message))));
    c.bench_function("validate_message", |b| {
        b.iter(|| validate_message(black_box(&message), &params))
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_hash_and_validate);
criterion_main!(benches);
