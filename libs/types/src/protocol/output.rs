//! # Outputs
//!
//! Every output variant carries an `amount`. The signature-locked outputs
//! pair an address with it; the extended outputs (Basic, Alias, Foundry,
//! NFT) add native tokens, unlock conditions and feature lists.

use super::address::Address;
use super::feature::Feature;
use super::kinds::{OutputKind, TokenSchemeKind};
use super::unlock_condition::UnlockCondition;
use crate::common::{AliasId, NftId, TokenId};
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// A native token balance held by an output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NativeToken {
    pub id: TokenId,
    pub amount: U256,
}

/// Foundry supply accounting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleTokenScheme {
    pub minted_tokens: U256,
    pub melted_tokens: U256,
    pub maximum_supply: U256,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TokenScheme {
    Simple(SimpleTokenScheme),
}

impl TokenScheme {
    pub fn kind(&self) -> TokenSchemeKind {
        match self {
            TokenScheme::Simple(_) => TokenSchemeKind::Simple,
        }
    }
}

/// Address + amount; shape shared by the two signature-locked outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SigLockedOutput {
    pub address: Address,
    pub amount: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TreasuryOutput {
    pub amount: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicOutput {
    pub amount: u64,
    #[serde(default)]
    pub native_tokens: Vec<NativeToken>,
    pub unlock_conditions: Vec<UnlockCondition>,
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasOutput {
    pub amount: u64,
    #[serde(default)]
    pub native_tokens: Vec<NativeToken>,
    pub alias_id: AliasId,
    pub state_index: u32,
    #[serde(default, with = "crate::common::hex_bytes")]
    pub state_metadata: Vec<u8>,
    pub foundry_counter: u32,
    pub unlock_conditions: Vec<UnlockCondition>,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub immutable_features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoundryOutput {
    pub amount: u64,
    #[serde(default)]
    pub native_tokens: Vec<NativeToken>,
    pub serial_number: u32,
    pub token_scheme: TokenScheme,
    pub unlock_conditions: Vec<UnlockCondition>,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub immutable_features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftOutput {
    pub amount: u64,
    #[serde(default)]
    pub native_tokens: Vec<NativeToken>,
    pub nft_id: NftId,
    pub unlock_conditions: Vec<UnlockCondition>,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub immutable_features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Output {
    SigLockedSingle(SigLockedOutput),
    SigLockedDustAllowance(SigLockedOutput),
    Treasury(TreasuryOutput),
    Basic(BasicOutput),
    Alias(AliasOutput),
    Foundry(FoundryOutput),
    Nft(NftOutput),
}

impl Output {
    pub fn kind(&self) -> OutputKind {
        match self {
            Output::SigLockedSingle(_) => OutputKind::SigLockedSingle,
            Output::SigLockedDustAllowance(_) => OutputKind::SigLockedDustAllowance,
            Output::Treasury(_) => OutputKind::Treasury,
            Output::Basic(_) => OutputKind::Basic,
            Output::Alias(_) => OutputKind::Alias,
            Output::Foundry(_) => OutputKind::Foundry,
            Output::Nft(_) => OutputKind::Nft,
        }
    }

    pub fn amount(&self) -> u64 {
        match self {
            Output::SigLockedSingle(o) | Output::SigLockedDustAllowance(o) => o.amount,
            Output::Treasury(o) => o.amount,
            Output::Basic(o) => o.amount,
            Output::Alias(o) => o.amount,
            Output::Foundry(o) => o.amount,
            Output::Nft(o) => o.amount,
        }
    }

    /// Native tokens held; empty for the simple output kinds
    pub fn native_tokens(&self) -> &[NativeToken] {
        match self {
            Output::Basic(o) => &o.native_tokens,
            Output::Alias(o) => &o.native_tokens,
            Output::Foundry(o) => &o.native_tokens,
            Output::Nft(o) => &o.native_tokens,
            _ => &[],
        }
    }

    pub fn unlock_conditions(&self) -> &[UnlockCondition] {
        match self {
            Output::Basic(o) => &o.unlock_conditions,
            Output::Alias(o) => &o.unlock_conditions,
            Output::Foundry(o) => &o.unlock_conditions,
            Output::Nft(o) => &o.unlock_conditions,
            _ => &[],
        }
    }
}
