//! # Decode and Validate Demo
//!
//! Loads protocol parameters (defaults, optional TOML file given as the first
//! argument, `TANGLE_*` environment overrides), encodes an indexation
//! message, decodes it back and runs the validators.
//!
//! ```text
//! RUST_LOG=debug cargo run -p tangle-codec --example validation_demo -- tangle.toml
//! ```

use std::path::PathBuf;
use tangle_codec::{
    deserialize_message_hex, message_id, serialize_message_hex, validate_message,
};
use tangle_config::ProtocolParameters;
use tangle_types::{IndexationPayload, Message, MessageId, Payload};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let path = std::env::args().nth(1).map(PathBuf::from);
    let params = ProtocolParameters::load(path.as_deref())?;
    info!(
        network = %params.network_name,
        network_id = params.network_id(),
        "Loaded protocol parameters"
    );

    let message = Message::new(
        params.network_id(),
        vec![MessageId::new([0x11; 32]), MessageId::new([0x22; 32])],
        Some(Payload::Indexation(IndexationPayload {
            index: b"tangle-codec".to_vec(),
            data: b"hello".to_vec(),
        })),
    );

    let encoded = serialize_message_hex(&message)?;
    println!("encoded ({} bytes): {encoded}", encoded.len() / 2);

    let decoded = deserialize_message_hex(&encoded)?;
    println!("message id: {}", message_id(&decoded)?);

    let report = validate_message(&decoded, &params);
    println!("validation: {report}");

    let mut broken = decoded;
    broken.parents.reverse();
    println!("reversed parents: {}", validate_message(&broken, &params));

    Ok(())
}
