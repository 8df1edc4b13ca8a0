//! Payload and transaction essence rules.

use super::outputs::validate_output;
use super::report::ValidationReport;
use super::rules::validate_count;
use super::unlock_blocks::validate_unlock_blocks;
use crate::constants::{
    MAX_FUNDS_COUNT, MAX_INDEXATION_KEY_LENGTH, MAX_INPUT_COUNT, MAX_NATIVE_TOKEN_COUNT,
    MAX_NUMBER_PARENTS, MAX_OUTPUT_COUNT, MIN_INDEXATION_KEY_LENGTH, MIN_INPUT_COUNT,
    MIN_MIGRATED_FUNDS_DEPOSIT, MIN_NUMBER_PARENTS, MIN_OUTPUT_COUNT,
};
use std::collections::{BTreeSet, HashSet};
use tangle_config::ProtocolParameters;
use tangle_types::{
    IndexationPayload, Input, MessageId, MilestonePayload, Output, Payload, PayloadKind,
    ReceiptPayload, TransactionEssence, TransactionPayload, TreasuryTransactionPayload,
};
use tracing::debug;

/// Dispatch on the payload kind; an absent payload is valid
pub fn validate_payload(
    payload: Option<&Payload>,
    params: &ProtocolParameters,
) -> ValidationReport {
    let Some(payload) = payload else {
        return ValidationReport::ok();
    };
    debug!(kind = payload.kind().name(), "Validating payload");

    match payload {
        Payload::Transaction(transaction) => validate_transaction_payload(transaction, params),
        Payload::Milestone(milestone) => validate_milestone_payload(milestone, params),
        Payload::Indexation(indexation) => validate_indexation_payload(indexation),
        Payload::Receipt(receipt) => validate_receipt_payload(receipt, params),
        Payload::TreasuryTransaction(treasury) => {
            validate_treasury_transaction_payload(treasury, params)
        }
    }
}

pub fn validate_transaction_payload(
    payload: &TransactionPayload,
    params: &ProtocolParameters,
) -> ValidationReport {
    let mut report = ValidationReport::ok();

    report.ensure(
        payload.unlock_blocks.len() == payload.essence.inputs.len(),
        || {
            "Transaction payload unlocks count must match inputs count of the Transaction Essence"
                .to_string()
        },
    );
    report.absorb(validate_essence(&payload.essence, params));
    report.absorb(validate_unlock_blocks(&payload.unlock_blocks));

    report
}

pub fn validate_essence(
    essence: &TransactionEssence,
    params: &ProtocolParameters,
) -> ValidationReport {
    let mut report = ValidationReport::ok();

    report.absorb(validate_count(
        essence.inputs.len(),
        MIN_INPUT_COUNT,
        MAX_INPUT_COUNT,
        "Inputs",
    ));
    report.ensure(
        essence.inputs.iter().all(|input| matches!(input, Input::Utxo(_))),
        || "Transaction essence inputs must all be UTXO Inputs.".to_string(),
    );
    let distinct: HashSet<&Input> = essence.inputs.iter().collect();
    report.ensure(distinct.len() == essence.inputs.len(), || {
        "Each pair of Transaction Id and Transaction Output Index must be unique in the list of inputs."
            .to_string()
    });

    report.absorb(validate_count(
        essence.outputs.len(),
        MIN_OUTPUT_COUNT,
        MAX_OUTPUT_COUNT,
        "Outputs",
    ));
    report.ensure(
        essence.outputs.iter().all(|output| {
            matches!(
                output,
                Output::SigLockedSingle(_) | Output::SigLockedDustAllowance(_)
            )
        }),
        || {
            "Transaction essence outputs must be Signature Locked Single or Signature Locked Dust Allowance outputs."
                .to_string()
        },
    );

    let total: u128 = essence
        .outputs
        .iter()
        .map(|output| u128::from(output.amount()))
        .sum();
    report.ensure(total <= u128::from(params.token_supply), || {
        format!(
            "The sum of all outputs amount field must not exceed {}.",
            params.token_supply
        )
    });

    let token_ids: BTreeSet<_> = essence
        .outputs
        .iter()
        .flat_map(|output| output.native_tokens().iter().map(|token| token.id))
        .collect();
    report.ensure(token_ids.len() <= MAX_NATIVE_TOKEN_COUNT, || {
        format!(
            "The count of all distinct native tokens present in outputs must not exceed {MAX_NATIVE_TOKEN_COUNT}."
        )
    });

    for output in &essence.outputs {
        report.absorb(validate_output(output, params));
    }

    if let Some(payload) = essence.payload.as_deref() {
        report.ensure(payload.kind() == PayloadKind::Indexation, || {
            "Transaction essence payload must be an Indexation payload.".to_string()
        });
        report.absorb(validate_payload(Some(payload), params));
    }

    report
}

pub fn validate_indexation_payload(payload: &IndexationPayload) -> ValidationReport {
    let length = payload.index.len();
    if (MIN_INDEXATION_KEY_LENGTH..=MAX_INDEXATION_KEY_LENGTH).contains(&length) {
        ValidationReport::ok()
    } else {
        ValidationReport::fail(format!(
            "Indexation payload index length must be between {MIN_INDEXATION_KEY_LENGTH} and {MAX_INDEXATION_KEY_LENGTH} bytes."
        ))
    }
}

pub fn validate_milestone_payload(
    payload: &MilestonePayload,
    params: &ProtocolParameters,
) -> ValidationReport {
    let mut report = validate_parents(&payload.parents, "Milestone");

    report.ensure(payload.public_keys.len() == payload.signatures.len(), || {
        "Milestone public keys count must match signatures count.".to_string()
    });

    if let Some(receipt) = payload.receipt.as_deref() {
        report.ensure(receipt.kind() == PayloadKind::Receipt, || {
            "Milestone receipt must be a Receipt payload.".to_string()
        });
        report.absorb(validate_payload(Some(receipt), params));
    }

    report
}

pub fn validate_receipt_payload(
    payload: &ReceiptPayload,
    params: &ProtocolParameters,
) -> ValidationReport {
    let mut report = validate_count(payload.funds.len(), 1, MAX_FUNDS_COUNT, "Receipt funds");

    for (index, funds) in payload.funds.iter().enumerate() {
        report.ensure(funds.deposit >= MIN_MIGRATED_FUNDS_DEPOSIT, || {
            format!(
                "Migrated funds deposit at index {index} must be at least {MIN_MIGRATED_FUNDS_DEPOSIT}."
            )
        });
    }

    match payload.transaction.as_ref() {
        Payload::TreasuryTransaction(treasury) => {
            report.absorb(validate_treasury_transaction_payload(treasury, params));
        }
        _ => report.push_error("Receipt transaction must be a Treasury Transaction payload."),
    }

    report
}

pub fn validate_treasury_transaction_payload(
    payload: &TreasuryTransactionPayload,
    params: &ProtocolParameters,
) -> ValidationReport {
    validate_output(&Output::Treasury(payload.output), params)
}

/// Parent count within bounds, lexicographically sorted and unique
pub(crate) fn validate_parents(parents: &[MessageId], owner: &str) -> ValidationReport {
    let mut report = validate_count(
        parents.len(),
        MIN_NUMBER_PARENTS,
        MAX_NUMBER_PARENTS,
        &format!("{owner} parents"),
    );
    report.ensure(parents.windows(2).all(|pair| pair[0] < pair[1]), || {
        format!("{owner} parents must be lexicographically sorted and unique.")
    });
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use tangle_types::{
        Address, Ed25519Address, Ed25519PublicKey, Ed25519Signature, Ed25519SignatureBlock,
        MerkleProof, MigratedFunds, MilestoneId, SigLockedOutput, Signature, TailTransactionHash,
        TransactionId, TreasuryInput, TreasuryOutput, UnlockBlock, UtxoInput,
    };

    fn params() -> ProtocolParameters {
        ProtocolParameters::default()
    }

    fn utxo(index: u16) -> Input {
        Input::Utxo(UtxoInput::new(TransactionId::new([1u8; 32]), index))
    }

    fn single(amount: u64) -> Output {
        Output::SigLockedSingle(SigLockedOutput {
            address: Address::Ed25519(Ed25519Address::new([2u8; 32])),
            amount,
        })
    }

    fn signature_block() -> UnlockBlock {
        UnlockBlock::Signature {
            signature: Signature::Ed25519(Ed25519SignatureBlock {
                public_key: Ed25519PublicKey::new([3u8; 32]),
                signature: Ed25519Signature::new([4u8; 64]),
            }),
        }
    }

    fn transaction() -> TransactionPayload {
        TransactionPayload {
            essence: TransactionEssence {
                inputs: vec![utxo(0), utxo(1)],
                outputs: vec![single(1_000_000)],
                payload: Some(Box::new(Payload::Indexation(IndexationPayload {
                    index: b"Foo".to_vec(),
                    data: b"Bar".to_vec(),
                }))),
            },
            unlock_blocks: vec![signature_block(), UnlockBlock::Reference { reference: 0 }],
        }
    }

    fn treasury_transaction(amount: u64) -> Payload {
        Payload::TreasuryTransaction(TreasuryTransactionPayload {
            input: TreasuryInput {
                milestone_id: MilestoneId::new([5u8; 32]),
            },
            output: TreasuryOutput { amount },
        })
    }

    fn receipt(deposit: u64) -> ReceiptPayload {
        ReceiptPayload {
            migrated_at: 10,
            is_final: true,
            funds: vec![MigratedFunds {
                tail_transaction_hash: TailTransactionHash::new([6u8; 49]),
                address: Address::Ed25519(Ed25519Address::new([7u8; 32])),
                deposit,
            }],
            transaction: Box::new(treasury_transaction(5_000_000)),
        }
    }

    #[test]
    fn test_valid_transaction() {
        let report = validate_payload(Some(&Payload::Transaction(transaction())), &params());
        assert!(report.is_valid, "{report}");
        assert!(validate_payload(None, &params()).is_valid);
    }

    #[test]
    fn test_unlock_count_mismatch() {
        let mut payload = transaction();
        payload.unlock_blocks.pop();
        assert_eq!(
            validate_transaction_payload(&payload, &params()).errors,
            vec!["Transaction payload unlocks count must match inputs count of the Transaction Essence"]
        );
    }

    #[test]
    fn test_essence_duplicate_inputs_and_empty_outputs() {
        let essence = TransactionEssence {
            inputs: vec![utxo(3), utxo(3)],
            outputs: Vec::new(),
            payload: None,
        };
        assert_eq!(
            validate_essence(&essence, &params()).errors,
            vec![
                "Each pair of Transaction Id and Transaction Output Index must be unique in the list of inputs.",
                "Outputs count must be between 1 and 127.",
            ]
        );
    }

    #[test]
    fn test_essence_total_exceeds_supply() {
        let supply = params().token_supply;
        let essence = TransactionEssence {
            inputs: vec![utxo(0)],
            outputs: vec![single(supply), single(supply)],
            payload: None,
        };
        let report = validate_essence(&essence, &params());
        assert_eq!(
            report.errors,
            vec![format!(
                "The sum of all outputs amount field must not exceed {supply}."
            )]
        );
    }

    #[test]
    fn test_essence_rejects_treasury_parts() {
        let essence = TransactionEssence {
            inputs: vec![Input::Treasury(TreasuryInput {
                milestone_id: MilestoneId::new([1u8; 32]),
            })],
            outputs: vec![Output::Treasury(TreasuryOutput { amount: 1 })],
            payload: Some(Box::new(treasury_transaction(1))),
        };
        let report = validate_essence(&essence, &params());
        assert!(report
            .errors
            .contains(&"Transaction essence inputs must all be UTXO Inputs.".to_string()));
        assert!(report.errors.iter().any(|e| e.starts_with("Transaction essence outputs must be")));
        assert!(report
            .errors
            .contains(&"Transaction essence payload must be an Indexation payload.".to_string()));
    }

    #[test]
    fn test_indexation_index_length() {
        let empty = IndexationPayload {
            index: Vec::new(),
            data: Vec::new(),
        };
        assert_eq!(
            validate_indexation_payload(&empty).errors,
            vec!["Indexation payload index length must be between 1 and 64 bytes."]
        );
    }

    #[test]
    fn test_milestone_rules() {
        let milestone = MilestonePayload {
            index: 1,
            timestamp: 1_600_000_000,
            parents: vec![MessageId::new([2u8; 32]), MessageId::new([1u8; 32])],
            inclusion_merkle_proof: MerkleProof::new([0u8; 32]),
            next_pow_score: 0,
            next_pow_score_milestone_index: 0,
            public_keys: vec![Ed25519PublicKey::new([1u8; 32])],
            receipt: Some(Box::new(Payload::Receipt(receipt(1_000_000)))),
            signatures: Vec::new(),
        };
        assert_eq!(
            validate_milestone_payload(&milestone, &params()).errors,
            vec![
                "Milestone parents must be lexicographically sorted and unique.",
                "Milestone public keys count must match signatures count.",
            ]
        );
    }

    #[test]
    fn test_receipt_rules() {
        assert!(validate_receipt_payload(&receipt(1_000_000), &params()).is_valid);

        let small = validate_receipt_payload(&receipt(999_999), &params());
        assert_eq!(
            small.errors,
            vec!["Migrated funds deposit at index 0 must be at least 1000000."]
        );

        let mut wrong_transaction = receipt(1_000_000);
        wrong_transaction.transaction = Box::new(Payload::Indexation(IndexationPayload {
            index: vec![1],
            data: Vec::new(),
        }));
        assert_eq!(
            validate_receipt_payload(&wrong_transaction, &params()).errors,
            vec!["Receipt transaction must be a Treasury Transaction payload."]
        );
    }
}
