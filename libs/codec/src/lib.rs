//! # Tangle Codec
//!
//! ## Purpose
//!
//! The "rules" layer over [`tangle_types`]: the byte layout of every wire
//! entity, the identifiers derived from those bytes, storage deposit
//! arithmetic and the structural validators that run on decoded trees.
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → [tangle-codec] → callers (node clients, wallets, tooling)
//!     ↑              ↓
//! Pure Data    ReadStream/WriteStream cursors
//! Structures   binary::* encode/decode
//!              hashing (Blake2b-256 ids)
//!              validation (ValidationReport)
//! ```
//!
//! ## Wire conventions
//!
//! - Integers are little-endian; U256 amounts are 32 little-endian bytes.
//! - Every entity starts with its type tag: u8 for most families, u32 for
//!   payloads.
//! - List counts are u8 or u16 depending on the list.
//! - Payloads are preceded by a u32 byte length; zero means no payload.
//!
//! ## Error model
//!
//! Encoding and decoding fail fast with a [`ProtocolError`] naming the
//! entity or field at fault. Validation never fails fast: it collects every
//! violated rule into a [`validation::ValidationReport`].
//!
//! ## Quick Start
//!
//! ```rust
//! use tangle_codec::{deserialize_message_bytes, message_id, serialize_message_bytes};
//! use tangle_types::{IndexationPayload, Message, MessageId, Payload};
//!
//! let message = Message::new(
//!     7,
//!     vec![MessageId::new([1; 32])],
//!     Some(Payload::Indexation(IndexationPayload {
//!         index: b"Foo".to_vec(),
//!         data: b"Bar".to_vec(),
//!     })),
//! );
//!
//! let bytes = serialize_message_bytes(&message)?;
//! assert_eq!(deserialize_message_bytes(&bytes)?, message);
//! let _id = message_id(&message)?;
//! # Ok::<(), tangle_codec::ProtocolError>(())
//! ```

pub mod binary;
pub mod constants;
pub mod error;
pub mod hashing;
pub mod storage;
pub mod stream;
pub mod validation;

pub use binary::{
    deserialize_message, deserialize_message_bytes, deserialize_message_hex, deserialize_payload,
    deserialize_transaction_essence, serialize_message, serialize_message_bytes,
    serialize_message_hex, serialize_payload, serialize_transaction_essence,
};
pub use error::{ProtocolError, ProtocolResult};
pub use hashing::{
    alias_id_from_output_id, blake2b_256, construct_token_id, essence_hash, inputs_commitment,
    message_id, milestone_essence_hash, nft_id_from_output_id, transaction_id,
};
pub use storage::{min_storage_deposit, storage_deposit, weighted_bytes};
pub use stream::{ReadStream, WriteStream};
pub use validation::{validate_message, validate_output, validate_payload, ValidationReport};
