//! # Wire Format Constants
//!
//! Field widths, sequence bounds and the minimum encoded size of every
//! family. Minimums are `const` sums of the field widths so there is no
//! evaluation-order dependency between modules.
//!
//! ```text
//! primitive widths → identifier widths → per-family minimums
//!   UINT16_SIZE        ALIAS_ID_LENGTH     MIN_ALIAS_OUTPUT_LENGTH
//! ```

// ── Primitive widths ────────────────────────────────────────────────────────

pub const BYTE_SIZE: usize = 1;
pub const UINT16_SIZE: usize = 2;
pub const UINT32_SIZE: usize = 4;
pub const UINT64_SIZE: usize = 8;
pub const UINT256_SIZE: usize = 32;

/// Width of a one-byte type discriminant
pub const SMALL_TYPE_LENGTH: usize = BYTE_SIZE;
/// Width of a payload type discriminant
pub const TYPE_LENGTH: usize = UINT32_SIZE;

/// Output size of Blake2b-256
pub const BLAKE2B_256_LENGTH: usize = 32;

// ── Identifier widths ───────────────────────────────────────────────────────

pub const MESSAGE_ID_LENGTH: usize = BLAKE2B_256_LENGTH;
pub const TRANSACTION_ID_LENGTH: usize = BLAKE2B_256_LENGTH;
pub const MILESTONE_ID_LENGTH: usize = BLAKE2B_256_LENGTH;
pub const MERKLE_PROOF_LENGTH: usize = BLAKE2B_256_LENGTH;
pub const ED25519_ADDRESS_LENGTH: usize = BLAKE2B_256_LENGTH;
pub const BLS_ADDRESS_LENGTH: usize = 32;
pub const ALIAS_ID_LENGTH: usize = 32;
pub const NFT_ID_LENGTH: usize = 32;
pub const ED25519_PUBLIC_KEY_LENGTH: usize = 32;
pub const ED25519_SIGNATURE_LENGTH: usize = 64;
pub const TAIL_TRANSACTION_HASH_LENGTH: usize = 49;
pub const OUTPUT_ID_LENGTH: usize = TRANSACTION_ID_LENGTH + UINT16_SIZE;

/// Every address variant carries a 32-byte body
pub const ADDRESS_BODY_LENGTH: usize = 32;
pub const MIN_ADDRESS_LENGTH: usize = SMALL_TYPE_LENGTH + ADDRESS_BODY_LENGTH;
/// Serialized alias address + serial number + token scheme kind
pub const TOKEN_ID_LENGTH: usize = MIN_ADDRESS_LENGTH + UINT32_SIZE + SMALL_TYPE_LENGTH;

// ── Sequence bounds ─────────────────────────────────────────────────────────

pub const MIN_NUMBER_PARENTS: usize = 1;
pub const MAX_NUMBER_PARENTS: usize = 8;
pub const MIN_INPUT_COUNT: usize = 1;
pub const MAX_INPUT_COUNT: usize = 127;
pub const MIN_OUTPUT_COUNT: usize = 1;
pub const MAX_OUTPUT_COUNT: usize = 127;
pub const MAX_FUNDS_COUNT: usize = 127;
pub const MAX_NATIVE_TOKEN_COUNT: usize = 64;
pub const MAX_UNLOCK_CONDITION_COUNT: usize = 7;
pub const MAX_FEATURE_COUNT: usize = 4;
pub const MAX_UNLOCK_BLOCK_COUNT: usize = MAX_INPUT_COUNT;
pub const MIN_INDEXATION_KEY_LENGTH: usize = 1;
pub const MAX_INDEXATION_KEY_LENGTH: usize = 64;
pub const MAX_METADATA_LENGTH: usize = 8192;
pub const MAX_TAG_LENGTH: usize = 64;

/// Largest encoded message accepted or produced
pub const MAX_MESSAGE_LENGTH: usize = 32768;

/// Smallest amount a dust allowance output may hold
pub const MIN_DUST_ALLOWANCE_AMOUNT: u64 = 1_000_000;
/// Smallest deposit a migrated funds entry may carry
pub const MIN_MIGRATED_FUNDS_DEPOSIT: u64 = 1_000_000;

// ── Family minimums ─────────────────────────────────────────────────────────

pub const MIN_INPUT_LENGTH: usize = SMALL_TYPE_LENGTH + TRANSACTION_ID_LENGTH;
pub const MIN_UTXO_INPUT_LENGTH: usize = MIN_INPUT_LENGTH + UINT16_SIZE;
pub const MIN_TREASURY_INPUT_LENGTH: usize = SMALL_TYPE_LENGTH + MILESTONE_ID_LENGTH;

pub const MIN_NATIVE_TOKENS_LENGTH: usize = BYTE_SIZE;
pub const NATIVE_TOKEN_LENGTH: usize = TOKEN_ID_LENGTH + UINT256_SIZE;
pub const MIN_UNLOCK_CONDITIONS_LENGTH: usize = BYTE_SIZE;
pub const MIN_FEATURES_LENGTH: usize = BYTE_SIZE;

pub const MIN_UNLOCK_CONDITION_LENGTH: usize = SMALL_TYPE_LENGTH;
pub const MIN_ADDRESS_UNLOCK_CONDITION_LENGTH: usize = SMALL_TYPE_LENGTH + MIN_ADDRESS_LENGTH;
pub const MIN_STORAGE_DEPOSIT_RETURN_UNLOCK_CONDITION_LENGTH: usize =
    SMALL_TYPE_LENGTH + MIN_ADDRESS_LENGTH + UINT64_SIZE;
pub const MIN_TIMELOCK_UNLOCK_CONDITION_LENGTH: usize =
    SMALL_TYPE_LENGTH + UINT32_SIZE + UINT32_SIZE;
pub const MIN_EXPIRATION_UNLOCK_CONDITION_LENGTH: usize =
    SMALL_TYPE_LENGTH + MIN_ADDRESS_LENGTH + UINT32_SIZE + UINT32_SIZE;

pub const MIN_FEATURE_LENGTH: usize = SMALL_TYPE_LENGTH;
pub const MIN_ADDRESS_FEATURE_LENGTH: usize = SMALL_TYPE_LENGTH + MIN_ADDRESS_LENGTH;
pub const MIN_METADATA_FEATURE_LENGTH: usize = SMALL_TYPE_LENGTH + UINT16_SIZE + 1;
pub const MIN_TAG_FEATURE_LENGTH: usize = SMALL_TYPE_LENGTH + BYTE_SIZE + 1;

pub const MIN_SIMPLE_TOKEN_SCHEME_LENGTH: usize = SMALL_TYPE_LENGTH + 3 * UINT256_SIZE;

pub const MIN_OUTPUT_LENGTH: usize = SMALL_TYPE_LENGTH + UINT64_SIZE;
pub const MIN_SIG_LOCKED_OUTPUT_LENGTH: usize =
    SMALL_TYPE_LENGTH + MIN_ADDRESS_LENGTH + UINT64_SIZE;
pub const MIN_TREASURY_OUTPUT_LENGTH: usize = SMALL_TYPE_LENGTH + UINT64_SIZE;
pub const MIN_BASIC_OUTPUT_LENGTH: usize = SMALL_TYPE_LENGTH
    + UINT64_SIZE
    + MIN_NATIVE_TOKENS_LENGTH
    + MIN_UNLOCK_CONDITIONS_LENGTH
    + MIN_FEATURES_LENGTH;
pub const MIN_ALIAS_OUTPUT_LENGTH: usize = SMALL_TYPE_LENGTH
    + UINT64_SIZE
    + MIN_NATIVE_TOKENS_LENGTH
    + ALIAS_ID_LENGTH
    + UINT32_SIZE
    + UINT16_SIZE
    + UINT32_SIZE
    + MIN_UNLOCK_CONDITIONS_LENGTH
    + MIN_FEATURES_LENGTH
    + MIN_FEATURES_LENGTH;
pub const MIN_FOUNDRY_OUTPUT_LENGTH: usize = SMALL_TYPE_LENGTH
    + UINT64_SIZE
    + MIN_NATIVE_TOKENS_LENGTH
    + UINT32_SIZE
    + MIN_SIMPLE_TOKEN_SCHEME_LENGTH
    + MIN_UNLOCK_CONDITIONS_LENGTH
    + MIN_FEATURES_LENGTH
    + MIN_FEATURES_LENGTH;
pub const MIN_NFT_OUTPUT_LENGTH: usize = SMALL_TYPE_LENGTH
    + UINT64_SIZE
    + MIN_NATIVE_TOKENS_LENGTH
    + NFT_ID_LENGTH
    + MIN_UNLOCK_CONDITIONS_LENGTH
    + MIN_FEATURES_LENGTH
    + MIN_FEATURES_LENGTH;

pub const MIN_ED25519_SIGNATURE_LENGTH: usize =
    SMALL_TYPE_LENGTH + ED25519_PUBLIC_KEY_LENGTH + ED25519_SIGNATURE_LENGTH;
pub const MIN_SIGNATURE_LENGTH: usize = MIN_ED25519_SIGNATURE_LENGTH;
pub const MIN_UNLOCK_BLOCK_LENGTH: usize = SMALL_TYPE_LENGTH + UINT16_SIZE;
pub const MIN_SIGNATURE_UNLOCK_BLOCK_LENGTH: usize =
    SMALL_TYPE_LENGTH + MIN_ED25519_SIGNATURE_LENGTH;
pub const MIN_REFERENCE_UNLOCK_BLOCK_LENGTH: usize = SMALL_TYPE_LENGTH + UINT16_SIZE;

pub const MIN_MIGRATED_FUNDS_LENGTH: usize =
    TAIL_TRANSACTION_HASH_LENGTH + SMALL_TYPE_LENGTH + UINT64_SIZE;

pub const MIN_TRANSACTION_ESSENCE_LENGTH: usize = SMALL_TYPE_LENGTH
    + UINT16_SIZE
    + MIN_UTXO_INPUT_LENGTH
    + UINT16_SIZE
    + MIN_OUTPUT_LENGTH
    + UINT32_SIZE;

pub const MIN_PAYLOAD_LENGTH: usize = TYPE_LENGTH;
pub const MIN_TRANSACTION_PAYLOAD_LENGTH: usize =
    TYPE_LENGTH + MIN_TRANSACTION_ESSENCE_LENGTH + UINT16_SIZE;
pub const MIN_MILESTONE_PAYLOAD_LENGTH: usize = TYPE_LENGTH
    + UINT32_SIZE
    + UINT64_SIZE
    + BYTE_SIZE
    + MESSAGE_ID_LENGTH
    + MERKLE_PROOF_LENGTH
    + UINT32_SIZE
    + UINT32_SIZE
    + BYTE_SIZE
    + ED25519_PUBLIC_KEY_LENGTH
    + UINT32_SIZE
    + BYTE_SIZE
    + ED25519_SIGNATURE_LENGTH;
pub const MIN_INDEXATION_PAYLOAD_LENGTH: usize =
    TYPE_LENGTH + UINT16_SIZE + MIN_INDEXATION_KEY_LENGTH + UINT32_SIZE;
pub const MIN_RECEIPT_PAYLOAD_LENGTH: usize = TYPE_LENGTH
    + UINT32_SIZE
    + BYTE_SIZE
    + UINT16_SIZE
    + MIN_MIGRATED_FUNDS_LENGTH
    + UINT32_SIZE;
pub const MIN_TREASURY_TRANSACTION_PAYLOAD_LENGTH: usize =
    TYPE_LENGTH + MIN_TREASURY_INPUT_LENGTH + MIN_TREASURY_OUTPUT_LENGTH;

pub const MIN_MESSAGE_LENGTH: usize =
    UINT64_SIZE + BYTE_SIZE + MESSAGE_ID_LENGTH + UINT32_SIZE + UINT64_SIZE;
