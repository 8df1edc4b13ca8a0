//! Features: optional metadata attached to outputs.

use super::address::Address;
use super::kinds::FeatureKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Feature {
    Sender {
        address: Address,
    },
    Issuer {
        address: Address,
    },
    Metadata {
        #[serde(with = "crate::common::hex_bytes")]
        data: Vec<u8>,
    },
    Tag {
        #[serde(with = "crate::common::hex_bytes")]
        tag: Vec<u8>,
    },
}

impl Feature {
    pub fn kind(&self) -> FeatureKind {
        match self {
            Feature::Sender { .. } => FeatureKind::Sender,
            Feature::Issuer { .. } => FeatureKind::Issuer,
            Feature::Metadata { .. } => FeatureKind::Metadata,
            Feature::Tag { .. } => FeatureKind::Tag,
        }
    }
}
