//! # Tangle Types
//!
//! Pure data structures for the IOTA Tangle wire format: messages, payloads,
//! transaction essences, inputs, outputs, unlock conditions, features,
//! addresses and the typed byte-array identifiers they are built from.
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → libs/codec (binary encoding + validation) → callers
//!     ↑                ↓
//! Pure Data      Byte layout, hashing,
//! Structures     structural rules
//! ```
//!
//! ## What This Crate Does NOT Contain
//! - Binary encoding rules or length constants (see `tangle-codec`)
//! - Network parameters (see `tangle-config`)
//!
//! ## Quick Start
//!
//! ```rust
//! use tangle_types::{Address, Ed25519Address, Message, MessageId};
//!
//! let address = Address::Ed25519(Ed25519Address::new([7u8; 32]));
//! assert_eq!(address.kind() as u8, 0);
//!
//! let message = Message::new(1, vec![MessageId::new([1u8; 32])], None);
//! assert_eq!(message.nonce, 0);
//! ```

pub mod common;
pub mod protocol;

pub use common::{
    AliasId, BlsAddress, Ed25519Address, Ed25519PublicKey, Ed25519Signature, MerkleProof,
    MessageId, MilestoneId, NftId, OutputId, TailTransactionHash, TokenId, TransactionId,
    TypeError,
};
pub use primitive_types::U256;
pub use protocol::*;
