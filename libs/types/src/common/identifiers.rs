//! # Typed Byte-Array Identifiers
//!
//! Every fixed-width byte field on the wire (message ids, transaction ids,
//! address hashes, keys, signatures) gets its own newtype so the compiler
//! keeps a `MessageId` from being passed where a `TransactionId` is expected.
//!
//! ## Usage
//!
//! ```rust
//! use tangle_types::{MessageId, TransactionId};
//!
//! let parent = MessageId::from_hex(
//!     "0x6920b176f613ec7be59e68fc68f597eb3393af80f74c7c3db78198147d5f1f92",
//! )
//! .unwrap();
//! assert!(!parent.is_zero());
//!
//! let tx = TransactionId::new([0u8; 32]);
//! assert!(tx.is_zero());
//! ```
//!
//! Text forms are `0x`-prefixed lowercase hex both in `Display` and in serde.

use super::errors::{decode_hex, TypeError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Macro for generating typed wrappers around fixed-size byte arrays
///
/// Creates a `#[repr(transparent)]` newtype over `[u8; N]` with hex parsing,
/// hex display, conversions and hex-string serde.
#[macro_export]
macro_rules! define_byte_array {
    (
        $(#[$meta:meta])*
        $name:ident, $len:expr
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name(pub [u8; $len]);

        impl $name {
            /// Width of the identifier in bytes
            pub const LENGTH: usize = $len;

            #[inline(always)]
            pub const fn new(inner: [u8; $len]) -> Self {
                Self(inner)
            }

            /// All-zero value
            #[inline(always)]
            pub const fn zero() -> Self {
                Self([0u8; $len])
            }

            #[inline(always)]
            pub const fn inner(&self) -> &[u8; $len] {
                &self.0
            }

            #[inline(always)]
            pub const fn into_inner(self) -> [u8; $len] {
                self.0
            }

            #[inline(always)]
            pub fn as_bytes(&self) -> &[u8] {
                &self.0
            }

            pub fn is_zero(&self) -> bool {
                self.0.iter().all(|b| *b == 0)
            }

            /// Lowercase hex with `0x` prefix
            pub fn to_hex(&self) -> String {
                format!("0x{}", hex::encode(self.0))
            }

            /// Parse from hex, `0x` prefix optional
            pub fn from_hex(value: &str) -> Result<Self, $crate::common::TypeError> {
                let bytes = $crate::common::decode_hex(stringify!($name), value)?;
                Self::try_from(bytes.as_slice())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::zero()
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.to_hex())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.to_hex())
            }
        }

        impl From<[u8; $len]> for $name {
            #[inline(always)]
            fn from(inner: [u8; $len]) -> Self {
                Self(inner)
            }
        }

        impl From<$name> for [u8; $len] {
            #[inline(always)]
            fn from(wrapper: $name) -> [u8; $len] {
                wrapper.0
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = $crate::common::TypeError;

            fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
                let inner: [u8; $len] =
                    bytes
                        .try_into()
                        .map_err(|_| $crate::common::TypeError::InvalidLength {
                            name: stringify!($name),
                            expected: $len,
                            got: bytes.len(),
                        })?;
                Ok(Self(inner))
            }
        }

        impl AsRef<[u8]> for $name {
            #[inline(always)]
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::common::TypeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_hex(s)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.to_hex())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let text = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::from_hex(&text).map_err(serde::de::Error::custom)
            }
        }
    };
}

define_byte_array!(
    /// Blake2b-256 hash of a serialized message
    MessageId, 32
);
define_byte_array!(
    /// Blake2b-256 hash of a serialized transaction payload
    TransactionId, 32
);
define_byte_array!(
    /// Identifier of the milestone a treasury input spends
    MilestoneId, 32
);
define_byte_array!(
    /// Alias identifier; all zero until derived from the creating output id
    AliasId, 32
);
define_byte_array!(
    /// NFT identifier; all zero until derived from the creating output id
    NftId, 32
);
define_byte_array!(
    /// Blake2b-256 hash of an Ed25519 public key
    Ed25519Address, 32
);
define_byte_array!(BlsAddress, 32);
define_byte_array!(Ed25519PublicKey, 32);
define_byte_array!(Ed25519Signature, 64);
define_byte_array!(
    /// Root of the milestone's inclusion merkle tree
    MerkleProof, 32
);
define_byte_array!(
    /// Legacy (trinary network) tail transaction hash carried by migrated funds
    TailTransactionHash, 49
);
define_byte_array!(
    /// Native token id: serialized alias address, serial number, token scheme kind
    TokenId, 38
);

/// Reference to one output of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct OutputId {
    pub transaction_id: TransactionId,
    pub index: u16,
}

impl OutputId {
    /// Serialized width: transaction id + little-endian u16 index
    pub const LENGTH: usize = TransactionId::LENGTH + 2;

    pub const fn new(transaction_id: TransactionId, index: u16) -> Self {
        Self {
            transaction_id,
            index,
        }
    }

    pub fn to_bytes(&self) -> [u8; Self::LENGTH] {
        let mut out = [0u8; Self::LENGTH];
        out[..TransactionId::LENGTH].copy_from_slice(self.transaction_id.as_bytes());
        out[TransactionId::LENGTH..].copy_from_slice(&self.index.to_le_bytes());
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TypeError> {
        if bytes.len() != Self::LENGTH {
            return Err(TypeError::InvalidLength {
                name: "OutputId",
                expected: Self::LENGTH,
                got: bytes.len(),
            });
        }
        let transaction_id = TransactionId::try_from(&bytes[..TransactionId::LENGTH])?;
        let index = u16::from_le_bytes([bytes[32], bytes[33]]);
        Ok(Self::new(transaction_id, index))
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.to_bytes()))
    }
}

impl std::fmt::Display for OutputId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for OutputId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(&decode_hex("OutputId", s)?)
    }
}

impl Serialize for OutputId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for OutputId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
