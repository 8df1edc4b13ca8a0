//! # Structural Validation
//!
//! ## Purpose
//!
//! Semantic rules the binary codec does not enforce on its own: amount
//! bounds against the token supply, which unlock conditions and features
//! each output kind may carry, storage deposit return minimums, unlock block
//! references and payload nesting.
//!
//! ## Architecture
//!
//! ```text
//! Message ──► validate_message ──► validate_payload ──► validate_transaction_payload
//!                                       │                    ├─► validate_essence ──► validate_output
//!                                       │                    └─► validate_unlock_blocks
//!                                       ├─► validate_milestone_payload ──► validate_receipt_payload
//!                                       └─► validate_indexation_payload
//! ```
//!
//! Every function returns a [`ValidationReport`]. Validation never stops at
//! the first failure; all violated rules are reported in evaluation order.
//!
//! ## Usage
//!
//! ```rust
//! use tangle_codec::validation::validate_output;
//! use tangle_config::ProtocolParameters;
//! use tangle_types::{Address, BasicOutput, Ed25519Address, Output, UnlockCondition};
//!
//! let output = Output::Basic(BasicOutput {
//!     amount: 0,
//!     native_tokens: vec![],
//!     unlock_conditions: vec![UnlockCondition::Address {
//!         address: Address::Ed25519(Ed25519Address::new([1; 32])),
//!     }],
//!     features: vec![],
//! });
//!
//! let report = validate_output(&output, &ProtocolParameters::default());
//! assert!(!report.is_valid);
//! assert_eq!(report.errors, vec!["Basic output amount field must be larger than zero."]);
//! ```

pub mod features;
pub mod message;
pub mod native_tokens;
pub mod outputs;
pub mod payloads;
pub mod report;
pub mod rules;
pub mod unlock_blocks;
pub mod unlock_conditions;

pub use features::{validate_feature, validate_features};
pub use message::validate_message;
pub use native_tokens::validate_native_tokens;
pub use outputs::{
    output_rules, validate_output, validate_outputs, validate_simple_token_scheme, OutputRules,
};
pub use payloads::{
    validate_essence, validate_indexation_payload, validate_milestone_payload, validate_payload,
    validate_receipt_payload, validate_transaction_payload, validate_treasury_transaction_payload,
};
pub use report::ValidationReport;
pub use rules::{validate_ascending_order, validate_count, validate_distinct};
pub use unlock_blocks::validate_unlock_blocks;
pub use unlock_conditions::{validate_unlock_condition, validate_unlock_conditions};
