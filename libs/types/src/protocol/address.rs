//! Address variants: Ed25519 public-key hash, BLS key, Alias id, NFT id.

use super::kinds::AddressKind;
use crate::common::{AliasId, BlsAddress, Ed25519Address, NftId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "address", rename_all = "camelCase")]
pub enum Address {
    Ed25519(Ed25519Address),
    Bls(BlsAddress),
    Alias(AliasId),
    Nft(NftId),
}

impl Address {
    pub fn kind(&self) -> AddressKind {
        match self {
            Address::Ed25519(_) => AddressKind::Ed25519,
            Address::Bls(_) => AddressKind::Bls,
            Address::Alias(_) => AddressKind::Alias,
            Address::Nft(_) => AddressKind::Nft,
        }
    }

    /// Raw 32-byte body following the tag
    pub fn body(&self) -> &[u8] {
        match self {
            Address::Ed25519(a) => a.as_bytes(),
            Address::Bls(a) => a.as_bytes(),
            Address::Alias(a) => a.as_bytes(),
            Address::Nft(a) => a.as_bytes(),
        }
    }

    pub fn as_alias(&self) -> Option<&AliasId> {
        match self {
            Address::Alias(id) => Some(id),
            _ => None,
        }
    }

    pub fn as_nft(&self) -> Option<&NftId> {
        match self {
            Address::Nft(id) => Some(id),
            _ => None,
        }
    }
}

impl From<Ed25519Address> for Address {
    fn from(value: Ed25519Address) -> Self {
        Address::Ed25519(value)
    }
}

impl From<AliasId> for Address {
    fn from(value: AliasId) -> Self {
        Address::Alias(value)
    }
}

impl From<NftId> for Address {
    fn from(value: NftId) -> Self {
        Address::Nft(value)
    }
}
