//! # Payloads
//!
//! The recursive hub of the format. A milestone may embed a receipt, and a
//! receipt always embeds a treasury transaction; a transaction essence may
//! embed an indexation payload.

use super::address::Address;
use super::input::{Input, TreasuryInput};
use super::kinds::{EssenceKind, PayloadKind};
use super::output::{Output, TreasuryOutput};
use super::unlock_block::UnlockBlock;
use crate::common::{
    Ed25519PublicKey, Ed25519Signature, MerkleProof, MessageId, TailTransactionHash,
};
use serde::{Deserialize, Serialize};

/// The signed part of a transaction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionEssence {
    pub inputs: Vec<Input>,
    pub outputs: Vec<Output>,
    /// Only an indexation payload may be embedded here
    #[serde(default)]
    pub payload: Option<Box<Payload>>,
}

impl TransactionEssence {
    pub fn kind(&self) -> EssenceKind {
        EssenceKind::Regular
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPayload {
    pub essence: TransactionEssence,
    pub unlock_blocks: Vec<UnlockBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestonePayload {
    pub index: u32,
    pub timestamp: u64,
    pub parents: Vec<MessageId>,
    pub inclusion_merkle_proof: MerkleProof,
    pub next_pow_score: u32,
    pub next_pow_score_milestone_index: u32,
    pub public_keys: Vec<Ed25519PublicKey>,
    #[serde(default)]
    pub receipt: Option<Box<Payload>>,
    pub signatures: Vec<Ed25519Signature>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexationPayload {
    #[serde(with = "crate::common::hex_bytes")]
    pub index: Vec<u8>,
    #[serde(default, with = "crate::common::hex_bytes")]
    pub data: Vec<u8>,
}

/// Funds migrated from the legacy network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigratedFunds {
    pub tail_transaction_hash: TailTransactionHash,
    pub address: Address,
    pub deposit: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptPayload {
    pub migrated_at: u32,
    #[serde(rename = "final")]
    pub is_final: bool,
    pub funds: Vec<MigratedFunds>,
    /// Always a treasury transaction
    pub transaction: Box<Payload>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TreasuryTransactionPayload {
    pub input: TreasuryInput,
    pub output: TreasuryOutput,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Payload {
    Transaction(TransactionPayload),
    Milestone(MilestonePayload),
    Indexation(IndexationPayload),
    Receipt(ReceiptPayload),
    TreasuryTransaction(TreasuryTransactionPayload),
}

impl Payload {
    pub fn kind(&self) -> PayloadKind {
        match self {
            Payload::Transaction(_) => PayloadKind::Transaction,
            Payload::Milestone(_) => PayloadKind::Milestone,
            Payload::Indexation(_) => PayloadKind::Indexation,
            Payload::Receipt(_) => PayloadKind::Receipt,
            Payload::TreasuryTransaction(_) => PayloadKind::TreasuryTransaction,
        }
    }
}

impl From<TransactionPayload> for Payload {
    fn from(value: TransactionPayload) -> Self {
        Payload::Transaction(value)
    }
}

impl From<MilestonePayload> for Payload {
    fn from(value: MilestonePayload) -> Self {
        Payload::Milestone(value)
    }
}

impl From<IndexationPayload> for Payload {
    fn from(value: IndexationPayload) -> Self {
        Payload::Indexation(value)
    }
}

impl From<ReceiptPayload> for Payload {
    fn from(value: ReceiptPayload) -> Self {
        Payload::Receipt(value)
    }
}

impl From<TreasuryTransactionPayload> for Payload {
    fn from(value: TreasuryTransactionPayload) -> Self {
        Payload::TreasuryTransaction(value)
    }
}
