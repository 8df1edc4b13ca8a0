//! Unlock conditions: who may consume an output and under which deadlines.

use super::address::Address;
use super::kinds::UnlockConditionKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageDepositReturnUnlockCondition {
    pub return_address: Address,
    pub amount: u64,
}

/// Output is locked until the given milestone index and/or unix time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelockUnlockCondition {
    pub milestone_index: u32,
    pub unix_time: u32,
}

/// After the deadline only `return_address` may unlock the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpirationUnlockCondition {
    pub return_address: Address,
    pub milestone_index: u32,
    pub unix_time: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum UnlockCondition {
    Address { address: Address },
    StorageDepositReturn(StorageDepositReturnUnlockCondition),
    Timelock(TimelockUnlockCondition),
    Expiration(ExpirationUnlockCondition),
    StateControllerAddress { address: Address },
    GovernorAddress { address: Address },
    /// Address must be an Alias address
    ImmutableAlias { address: Address },
}

impl UnlockCondition {
    pub fn kind(&self) -> UnlockConditionKind {
        match self {
            UnlockCondition::Address { .. } => UnlockConditionKind::Address,
            UnlockCondition::StorageDepositReturn(_) => UnlockConditionKind::StorageDepositReturn,
            UnlockCondition::Timelock(_) => UnlockConditionKind::Timelock,
            UnlockCondition::Expiration(_) => UnlockConditionKind::Expiration,
            UnlockCondition::StateControllerAddress { .. } => {
                UnlockConditionKind::StateControllerAddress
            }
            UnlockCondition::GovernorAddress { .. } => UnlockConditionKind::GovernorAddress,
            UnlockCondition::ImmutableAlias { .. } => UnlockConditionKind::ImmutableAlias,
        }
    }

    /// The controlling address, if this condition carries one
    pub fn address(&self) -> Option<&Address> {
        match self {
            UnlockCondition::Address { address }
            | UnlockCondition::StateControllerAddress { address }
            | UnlockCondition::GovernorAddress { address }
            | UnlockCondition::ImmutableAlias { address } => Some(address),
            UnlockCondition::StorageDepositReturn(c) => Some(&c.return_address),
            UnlockCondition::Expiration(c) => Some(&c.return_address),
            UnlockCondition::Timelock(_) => None,
        }
    }
}
