//! Native token list rules.

use super::report::ValidationReport;
use super::rules::validate_distinct;
use crate::constants::MAX_NATIVE_TOKEN_COUNT;
use tangle_types::NativeToken;

pub fn validate_native_tokens(tokens: &[NativeToken]) -> ValidationReport {
    let mut report = ValidationReport::ok();

    report.ensure(tokens.len() <= MAX_NATIVE_TOKEN_COUNT, || {
        "Max native tokens count exceeded.".to_string()
    });

    for token in tokens {
        report.ensure(!token.amount.is_zero(), || {
            format!(
                "Native token {} must have a value bigger than zero.",
                token.id.to_hex()
            )
        });
    }

    let ids: Vec<_> = tokens.iter().map(|token| token.id).collect();
    report.absorb(validate_distinct(&ids, "Array", "native token"));
    report.ensure(ids.windows(2).all(|pair| pair[0] <= pair[1]), || {
        "Native Tokens must be lexicographically sorted based on Token id.".to_string()
    });

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use tangle_types::{TokenId, U256};

    fn token(first: u8, amount: u64) -> NativeToken {
        let mut id = [0u8; TokenId::LENGTH];
        id[0] = first;
        NativeToken {
            id: TokenId::new(id),
            amount: U256::from(amount),
        }
    }

    #[test]
    fn test_sorted_tokens_pass() {
        let report = validate_native_tokens(&[token(1, 10), token(2, 20)]);
        assert!(report.is_valid, "{report}");
        assert!(validate_native_tokens(&[]).is_valid);
    }

    #[test]
    fn test_zero_amount() {
        let report = validate_native_tokens(&[token(1, 0)]);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].starts_with("Native token 0x01"));
        assert!(report.errors[0].ends_with("must have a value bigger than zero."));
    }

    #[test]
    fn test_duplicates_and_order() {
        let duplicate = validate_native_tokens(&[token(1, 1), token(1, 2)]);
        assert_eq!(
            duplicate.errors,
            vec!["Array must not contain more than one native token of each type."]
        );

        let unsorted = validate_native_tokens(&[token(2, 1), token(1, 1)]);
        assert_eq!(
            unsorted.errors,
            vec!["Native Tokens must be lexicographically sorted based on Token id."]
        );
    }

    #[test]
    fn test_too_many_tokens() {
        let tokens: Vec<_> = (0..=MAX_NATIVE_TOKEN_COUNT as u8)
            .map(|i| token(i, 1))
            .collect();
        let report = validate_native_tokens(&tokens);
        assert_eq!(report.errors, vec!["Max native tokens count exceeded."]);
    }
}
