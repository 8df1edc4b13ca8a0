//! Shared building blocks: typed byte-array identifiers, hex helpers, errors.

pub mod errors;
pub mod hex_bytes;
pub mod identifiers;

pub use errors::{decode_hex, strip_hex_prefix, TypeError};
pub use identifiers::*;
