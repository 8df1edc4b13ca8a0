//! Signatures and the unlock blocks that carry them.

use super::kinds::{SignatureKind, UnlockBlockKind};
use crate::common::{Ed25519PublicKey, Ed25519Signature};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ed25519SignatureBlock {
    pub public_key: Ed25519PublicKey,
    pub signature: Ed25519Signature,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Signature {
    Ed25519(Ed25519SignatureBlock),
}

impl Signature {
    pub fn kind(&self) -> SignatureKind {
        match self {
            Signature::Ed25519(_) => SignatureKind::Ed25519,
        }
    }
}

/// One unlock block per transaction input, in input order.
///
/// `Reference`, `Alias` and `Nft` point at an earlier block by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum UnlockBlock {
    Signature { signature: Signature },
    Reference { reference: u16 },
    Alias { reference: u16 },
    Nft { reference: u16 },
}

impl UnlockBlock {
    pub fn kind(&self) -> UnlockBlockKind {
        match self {
            UnlockBlock::Signature { .. } => UnlockBlockKind::Signature,
            UnlockBlock::Reference { .. } => UnlockBlockKind::Reference,
            UnlockBlock::Alias { .. } => UnlockBlockKind::Alias,
            UnlockBlock::Nft { .. } => UnlockBlockKind::Nft,
        }
    }

    pub fn reference(&self) -> Option<u16> {
        match self {
            UnlockBlock::Signature { .. } => None,
            UnlockBlock::Reference { reference }
            | UnlockBlock::Alias { reference }
            | UnlockBlock::Nft { reference } => Some(*reference),
        }
    }
}
