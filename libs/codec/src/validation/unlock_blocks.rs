//! Unlock block list rules.
//!
//! Blocks are matched to inputs by position. A signature may appear only
//! once; later inputs spending to the same address point back at it with a
//! Reference block. Alias and NFT blocks point back at the block that
//! unlocked the owning alias or NFT.

use super::report::ValidationReport;
use std::collections::HashSet;
use tangle_types::{Signature, UnlockBlock};

pub fn validate_unlock_blocks(blocks: &[UnlockBlock]) -> ValidationReport {
    let mut report = ValidationReport::ok();
    let mut seen_signatures: HashSet<Signature> = HashSet::new();

    for (index, block) in blocks.iter().enumerate() {
        match block {
            UnlockBlock::Signature { signature } => {
                report.ensure(seen_signatures.insert(*signature), || {
                    format!("The Signature Unlock at index {index} must be unique.")
                });
            }
            UnlockBlock::Reference { reference } => {
                let target = usize::from(*reference);
                if target >= index {
                    report.push_error(format!(
                        "The Reference Unlock at index {index} must have Reference < {index}"
                    ));
                } else if !matches!(blocks[target], UnlockBlock::Signature { .. }) {
                    report.push_error(format!(
                        "The Unlock at index {index} must Reference a Signature Unlock."
                    ));
                }
            }
            UnlockBlock::Alias { reference } | UnlockBlock::Nft { reference } => {
                report.ensure(usize::from(*reference) < index, || {
                    let label = match block {
                        UnlockBlock::Alias { .. } => "Alias",
                        _ => "NFT",
                    };
                    format!("The {label} Unlock at index {index} must have Reference < {index}")
                });
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use tangle_types::{Ed25519PublicKey, Ed25519Signature, Ed25519SignatureBlock};

    fn signature(seed: u8) -> UnlockBlock {
        UnlockBlock::Signature {
            signature: Signature::Ed25519(Ed25519SignatureBlock {
                public_key: Ed25519PublicKey::new([seed; 32]),
                signature: Ed25519Signature::new([seed; 64]),
            }),
        }
    }

    #[test]
    fn test_signature_then_references() {
        let blocks = vec![
            signature(1),
            UnlockBlock::Reference { reference: 0 },
            UnlockBlock::Alias { reference: 0 },
            UnlockBlock::Nft { reference: 2 },
        ];
        let report = validate_unlock_blocks(&blocks);
        assert!(report.is_valid, "{report}");
    }

    #[test]
    fn test_duplicate_signature() {
        let report = validate_unlock_blocks(&[signature(1), signature(1)]);
        assert_eq!(
            report.errors,
            vec!["The Signature Unlock at index 1 must be unique."]
        );
    }

    #[test]
    fn test_reference_must_point_backward() {
        let report = validate_unlock_blocks(&[
            signature(1),
            UnlockBlock::Reference { reference: 1 },
        ]);
        assert_eq!(
            report.errors,
            vec!["The Reference Unlock at index 1 must have Reference < 1"]
        );
    }

    #[test]
    fn test_reference_must_target_signature() {
        let report = validate_unlock_blocks(&[
            signature(1),
            UnlockBlock::Alias { reference: 0 },
            UnlockBlock::Reference { reference: 1 },
        ]);
        assert_eq!(
            report.errors,
            vec!["The Unlock at index 2 must Reference a Signature Unlock."]
        );
    }

    #[test]
    fn test_alias_and_nft_self_reference() {
        let report = validate_unlock_blocks(&[
            UnlockBlock::Alias { reference: 0 },
            UnlockBlock::Nft { reference: 5 },
        ]);
        assert_eq!(
            report.errors,
            vec![
                "The Alias Unlock at index 0 must have Reference < 0",
                "The NFT Unlock at index 1 must have Reference < 1",
            ]
        );
    }
}
