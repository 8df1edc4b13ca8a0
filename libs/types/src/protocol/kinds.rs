//! # Type Discriminants
//!
//! Every wire entity starts with a numeric type tag. Each family gets a
//! `#[repr]` enum deriving `TryFromPrimitive` so a decoded tag converts with a
//! single `try_from`, and an unknown tag surfaces as an error instead of a
//! silently-wrong branch.
//!
//! | Family          | Width | Values                                   |
//! |-----------------|-------|------------------------------------------|
//! | Address         | u8    | 0, 1, 8, 16                              |
//! | Input           | u8    | 0-1                                      |
//! | Output          | u8    | 0-6                                      |
//! | UnlockCondition | u8    | 0-6                                      |
//! | Feature         | u8    | 0-3                                      |
//! | TokenScheme     | u8    | 0                                        |
//! | Signature       | u8    | 0                                        |
//! | UnlockBlock     | u8    | 0-3                                      |
//! | Essence         | u8    | 0                                        |
//! | Payload         | u32   | 0-4                                      |

use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, Serialize, Deserialize)]
pub enum AddressKind {
    Ed25519 = 0,
    Bls = 1,
    Alias = 8,
    Nft = 16,
}

impl AddressKind {
    pub fn name(&self) -> &'static str {
        match self {
            AddressKind::Ed25519 => "Ed25519 Address",
            AddressKind::Bls => "BLS Address",
            AddressKind::Alias => "Alias Address",
            AddressKind::Nft => "NFT Address",
        }
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, Serialize, Deserialize)]
pub enum InputKind {
    Utxo = 0,
    Treasury = 1,
}

impl InputKind {
    pub fn name(&self) -> &'static str {
        match self {
            InputKind::Utxo => "UTXO Input",
            InputKind::Treasury => "Treasury Input",
        }
    }
}

#[repr(u8)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    TryFromPrimitive,
    Serialize,
    Deserialize,
)]
pub enum OutputKind {
    SigLockedSingle = 0,
    SigLockedDustAllowance = 1,
    Treasury = 2,
    Basic = 3,
    Alias = 4,
    Foundry = 5,
    Nft = 6,
}

impl OutputKind {
    /// Short name used as the subject of validation messages
    pub fn name(&self) -> &'static str {
        match self {
            OutputKind::SigLockedSingle => "Signature Locked Single",
            OutputKind::SigLockedDustAllowance => "Signature Locked Dust Allowance",
            OutputKind::Treasury => "Treasury",
            OutputKind::Basic => "Basic",
            OutputKind::Alias => "Alias",
            OutputKind::Foundry => "Foundry",
            OutputKind::Nft => "NFT",
        }
    }
}

#[repr(u8)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    TryFromPrimitive,
    Serialize,
    Deserialize,
)]
pub enum UnlockConditionKind {
    Address = 0,
    StorageDepositReturn = 1,
    Timelock = 2,
    Expiration = 3,
    StateControllerAddress = 4,
    GovernorAddress = 5,
    ImmutableAlias = 6,
}

impl UnlockConditionKind {
    pub fn name(&self) -> &'static str {
        match self {
            UnlockConditionKind::Address => "Address Unlock Condition",
            UnlockConditionKind::StorageDepositReturn => "Storage Deposit Return Unlock Condition",
            UnlockConditionKind::Timelock => "Timelock Unlock Condition",
            UnlockConditionKind::Expiration => "Expiration Unlock Condition",
            UnlockConditionKind::StateControllerAddress => {
                "State Controller Address Unlock Condition"
            }
            UnlockConditionKind::GovernorAddress => "Governor Address Unlock Condition",
            UnlockConditionKind::ImmutableAlias => "Immutable Alias Address Unlock Condition",
        }
    }
}

#[repr(u8)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    TryFromPrimitive,
    Serialize,
    Deserialize,
)]
pub enum FeatureKind {
    Sender = 0,
    Issuer = 1,
    Metadata = 2,
    Tag = 3,
}

impl FeatureKind {
    pub fn name(&self) -> &'static str {
        match self {
            FeatureKind::Sender => "Sender Feature",
            FeatureKind::Issuer => "Issuer Feature",
            FeatureKind::Metadata => "Metadata Feature",
            FeatureKind::Tag => "Tag Feature",
        }
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, Serialize, Deserialize)]
pub enum TokenSchemeKind {
    Simple = 0,
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, Serialize, Deserialize)]
pub enum SignatureKind {
    Ed25519 = 0,
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, Serialize, Deserialize)]
pub enum UnlockBlockKind {
    Signature = 0,
    Reference = 1,
    Alias = 2,
    Nft = 3,
}

impl UnlockBlockKind {
    pub fn name(&self) -> &'static str {
        match self {
            UnlockBlockKind::Signature => "Signature Unlock Block",
            UnlockBlockKind::Reference => "Reference Unlock Block",
            UnlockBlockKind::Alias => "Alias Unlock Block",
            UnlockBlockKind::Nft => "NFT Unlock Block",
        }
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, Serialize, Deserialize)]
pub enum EssenceKind {
    Regular = 0,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, Serialize, Deserialize)]
pub enum PayloadKind {
    Transaction = 0,
    Milestone = 1,
    Indexation = 2,
    Receipt = 3,
    TreasuryTransaction = 4,
}

impl PayloadKind {
    pub fn name(&self) -> &'static str {
        match self {
            PayloadKind::Transaction => "Transaction",
            PayloadKind::Milestone => "Milestone",
            PayloadKind::Indexation => "Indexation",
            PayloadKind::Receipt => "Receipt",
            PayloadKind::TreasuryTransaction => "Treasury Transaction",
        }
    }

    /// Payload kinds a message may carry directly
    pub fn allowed_in_message(&self) -> bool {
        matches!(
            self,
            PayloadKind::Transaction | PayloadKind::Milestone | PayloadKind::Indexation
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_kind_sparse_values() {
        assert_eq!(AddressKind::try_from(8u8).unwrap(), AddressKind::Alias);
        assert_eq!(AddressKind::try_from(16u8).unwrap(), AddressKind::Nft);
        assert!(AddressKind::try_from(2u8).is_err());
    }

    #[test]
    fn test_payload_kind_is_u32() {
        assert_eq!(PayloadKind::TreasuryTransaction as u32, 4);
        assert!(PayloadKind::try_from(5u32).is_err());
        assert!(!PayloadKind::Receipt.allowed_in_message());
        assert!(PayloadKind::Milestone.allowed_in_message());
    }

    #[test]
    fn test_condition_kinds_order_by_tag() {
        assert!(UnlockConditionKind::Address < UnlockConditionKind::Expiration);
        assert!(FeatureKind::Metadata < FeatureKind::Tag);
    }
}
