//! Unlock condition list rules.

use super::report::ValidationReport;
use super::rules::{validate_ascending_order, validate_distinct};
use crate::constants::MAX_UNLOCK_CONDITION_COUNT;
use crate::storage::min_storage_deposit;
use tangle_config::ProtocolParameters;
use tangle_types::{StorageDepositReturnUnlockCondition, UnlockCondition};
use tracing::warn;

/// Checks `conditions` of an output holding `amount`
pub fn validate_unlock_conditions(
    conditions: &[UnlockCondition],
    amount: u64,
    params: &ProtocolParameters,
) -> ValidationReport {
    let mut report = ValidationReport::ok();

    report.ensure(conditions.len() <= MAX_UNLOCK_CONDITION_COUNT, || {
        "Max number of unlock conditions exceeded.".to_string()
    });

    let kinds: Vec<_> = conditions.iter().map(UnlockCondition::kind).collect();
    report.absorb(validate_distinct(&kinds, "Output", "unlock condition"));
    report.absorb(validate_ascending_order(&kinds, "Output", "Unlock Condition"));

    for condition in conditions {
        report.absorb(validate_unlock_condition(condition, amount, params));
    }

    report
}

pub fn validate_unlock_condition(
    condition: &UnlockCondition,
    amount: u64,
    params: &ProtocolParameters,
) -> ValidationReport {
    let mut report = ValidationReport::ok();
    match condition {
        UnlockCondition::Timelock(timelock) => {
            report.ensure(timelock.unix_time != 0 || timelock.milestone_index != 0, || {
                "Time unlock condition must be greater than zero.".to_string()
            });
        }
        UnlockCondition::Expiration(expiration) => {
            report.ensure(
                expiration.unix_time != 0 || expiration.milestone_index != 0,
                || "Expiration unlock condition must be greater than zero.".to_string(),
            );
        }
        UnlockCondition::StorageDepositReturn(sdr) => {
            report.absorb(validate_storage_deposit_return(sdr, amount, params));
        }
        UnlockCondition::Address { .. }
        | UnlockCondition::StateControllerAddress { .. }
        | UnlockCondition::GovernorAddress { .. }
        | UnlockCondition::ImmutableAlias { .. } => {}
    }
    report
}

fn validate_storage_deposit_return(
    condition: &StorageDepositReturnUnlockCondition,
    amount: u64,
    params: &ProtocolParameters,
) -> ValidationReport {
    let mut report = ValidationReport::ok();

    report.ensure(condition.amount > 0, || {
        "Storage deposit amount must be larger than zero.".to_string()
    });

    match min_storage_deposit(&condition.return_address, &params.rent_structure) {
        Ok(minimum) => report.ensure(condition.amount >= minimum, || {
            "Storage deposit return amount is less than the min storage deposit.".to_string()
        }),
        Err(e) => {
            warn!(error = %e, "Failed to compute min storage deposit");
            report.push_error(format!("Storage deposit return address is invalid: {e}"));
        }
    }

    report.ensure(condition.amount <= amount, || {
        "Storage deposit return amount exceeds target output's deposit.".to_string()
    });

    report
}
