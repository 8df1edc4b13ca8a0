//! Tangle protocol data model
//!
//! Closed tagged unions mirror the wire families one-to-one; the `kinds`
//! module holds their numeric discriminants.

pub mod address;
pub mod feature;
pub mod input;
pub mod kinds;
pub mod message;
pub mod output;
pub mod payload;
pub mod unlock_block;
pub mod unlock_condition;

pub use address::Address;
pub use feature::Feature;
pub use input::{Input, TreasuryInput, UtxoInput};
pub use kinds::*;
pub use message::Message;
pub use output::{
    AliasOutput, BasicOutput, FoundryOutput, NativeToken, NftOutput, Output, SigLockedOutput,
    SimpleTokenScheme, TokenScheme, TreasuryOutput,
};
pub use payload::{
    IndexationPayload, MigratedFunds, MilestonePayload, Payload, ReceiptPayload,
    TransactionEssence, TransactionPayload, TreasuryTransactionPayload,
};
pub use unlock_block::{Ed25519SignatureBlock, Signature, UnlockBlock};
pub use unlock_condition::{
    ExpirationUnlockCondition, StorageDepositReturnUnlockCondition, TimelockUnlockCondition,
    UnlockCondition,
};
