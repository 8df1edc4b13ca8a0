//! # Output validation
//!
//! Each output kind with unlock conditions and features gets an
//! [`OutputRules`] row stating which condition and feature kinds it may carry
//! and how many. The generic checks run off that row; the kind-specific
//! checks (alias self-reference, zeroed alias id, token scheme supply,
//! dust allowance minimum) follow.
//!
//! | Output  | Unlock conditions                           | Features              | Immutable        |
//! |---------|---------------------------------------------|-----------------------|------------------|
//! | Basic   | 1-4 of Address, SDR, Timelock, Expiration   | Sender, Metadata, Tag | none             |
//! | Alias   | exactly StateController + Governor          | Sender, Metadata      | Issuer, Metadata |
//! | Foundry | exactly ImmutableAlias                      | Metadata              | Metadata         |
//! | NFT     | 1-4 of Address, SDR, Timelock, Expiration   | Sender, Metadata, Tag | Issuer, Metadata |

use super::features::validate_features;
use super::native_tokens::validate_native_tokens;
use super::report::ValidationReport;
use super::rules::validate_count;
use super::unlock_conditions::validate_unlock_conditions;
use crate::constants::{MAX_METADATA_LENGTH, MIN_DUST_ALLOWANCE_AMOUNT};
use tangle_config::ProtocolParameters;
use tangle_types::{
    Address, AliasOutput, Feature, FeatureKind, FoundryOutput, NftOutput, Output, OutputKind,
    SimpleTokenScheme, TokenScheme, UnlockCondition, UnlockConditionKind,
};

/// Allowed shape of one output kind
#[derive(Debug, Clone, Copy)]
pub struct OutputRules {
    pub kind: OutputKind,
    /// Inclusive bounds on the unlock condition count
    pub unlock_condition_count: (usize, usize),
    pub unlock_condition_kinds: &'static [UnlockConditionKind],
    /// Condition that must be present, if any
    pub required_unlock_condition: Option<UnlockConditionKind>,
    pub feature_kinds: &'static [FeatureKind],
    pub immutable_feature_kinds: &'static [FeatureKind],
}

const OWNER_CONDITIONS: &[UnlockConditionKind] = &[
    UnlockConditionKind::Address,
    UnlockConditionKind::StorageDepositReturn,
    UnlockConditionKind::Timelock,
    UnlockConditionKind::Expiration,
];

pub const BASIC_OUTPUT_RULES: OutputRules = OutputRules {
    kind: OutputKind::Basic,
    unlock_condition_count: (1, 4),
    unlock_condition_kinds: OWNER_CONDITIONS,
    required_unlock_condition: Some(UnlockConditionKind::Address),
    feature_kinds: &[FeatureKind::Sender, FeatureKind::Metadata, FeatureKind::Tag],
    immutable_feature_kinds: &[],
};

pub const ALIAS_OUTPUT_RULES: OutputRules = OutputRules {
    kind: OutputKind::Alias,
    unlock_condition_count: (2, 2),
    unlock_condition_kinds: &[
        UnlockConditionKind::StateControllerAddress,
        UnlockConditionKind::GovernorAddress,
    ],
    required_unlock_condition: None,
    feature_kinds: &[FeatureKind::Sender, FeatureKind::Metadata],
    immutable_feature_kinds: &[FeatureKind::Issuer, FeatureKind::Metadata],
};

pub const FOUNDRY_OUTPUT_RULES: OutputRules = OutputRules {
    kind: OutputKind::Foundry,
    unlock_condition_count: (1, 1),
    unlock_condition_kinds: &[UnlockConditionKind::ImmutableAlias],
    required_unlock_condition: Some(UnlockConditionKind::ImmutableAlias),
    feature_kinds: &[FeatureKind::Metadata],
    immutable_feature_kinds: &[FeatureKind::Metadata],
};

pub const NFT_OUTPUT_RULES: OutputRules = OutputRules {
    kind: OutputKind::Nft,
    unlock_condition_count: (1, 4),
    unlock_condition_kinds: OWNER_CONDITIONS,
    required_unlock_condition: Some(UnlockConditionKind::Address),
    feature_kinds: &[FeatureKind::Sender, FeatureKind::Metadata, FeatureKind::Tag],
    immutable_feature_kinds: &[FeatureKind::Issuer, FeatureKind::Metadata],
};

/// Rule row for kinds that carry unlock conditions and features
pub fn output_rules(kind: OutputKind) -> Option<&'static OutputRules> {
    match kind {
        OutputKind::Basic => Some(&BASIC_OUTPUT_RULES),
        OutputKind::Alias => Some(&ALIAS_OUTPUT_RULES),
        OutputKind::Foundry => Some(&FOUNDRY_OUTPUT_RULES),
        OutputKind::Nft => Some(&NFT_OUTPUT_RULES),
        OutputKind::SigLockedSingle | OutputKind::SigLockedDustAllowance | OutputKind::Treasury => {
            None
        }
    }
}

pub fn validate_outputs(outputs: &[Output], params: &ProtocolParameters) -> ValidationReport {
    ValidationReport::merge(outputs.iter().map(|output| validate_output(output, params)))
}

pub fn validate_output(output: &Output, params: &ProtocolParameters) -> ValidationReport {
    let kind = output.kind();
    let name = kind.name();
    let mut report = ValidationReport::ok();

    if kind != OutputKind::Treasury {
        report.ensure(output.amount() > 0, || {
            format!("{name} output amount field must be larger than zero.")
        });
    }
    report.ensure(output.amount() <= params.token_supply, || {
        format!("{name} output amount field must not be larger than max token supply.")
    });

    match output {
        Output::SigLockedDustAllowance(dust) => {
            report.ensure(dust.amount >= MIN_DUST_ALLOWANCE_AMOUNT, || {
                format!(
                    "{name} output amount field must be at least {MIN_DUST_ALLOWANCE_AMOUNT}."
                )
            });
        }
        Output::SigLockedSingle(_) | Output::Treasury(_) => {}
        Output::Basic(basic) => {
            report.absorb(validate_common(
                &BASIC_OUTPUT_RULES,
                output,
                &basic.features,
                &[],
                params,
            ));
        }
        Output::Alias(alias) => {
            report.absorb(validate_common(
                &ALIAS_OUTPUT_RULES,
                output,
                &alias.features,
                &alias.immutable_features,
                params,
            ));
            report.absorb(validate_alias(alias));
        }
        Output::Foundry(foundry) => {
            report.absorb(validate_common(
                &FOUNDRY_OUTPUT_RULES,
                output,
                &foundry.features,
                &foundry.immutable_features,
                params,
            ));
            report.absorb(validate_foundry(foundry));
        }
        Output::Nft(nft) => {
            report.absorb(validate_common(
                &NFT_OUTPUT_RULES,
                output,
                &nft.features,
                &nft.immutable_features,
                params,
            ));
            report.absorb(validate_nft(nft));
        }
    }

    report
}

fn validate_common(
    rules: &OutputRules,
    output: &Output,
    features: &[Feature],
    immutable_features: &[Feature],
    params: &ProtocolParameters,
) -> ValidationReport {
    let name = rules.kind.name();
    let conditions = output.unlock_conditions();
    let mut report = ValidationReport::ok();

    let (min, max) = rules.unlock_condition_count;
    report.absorb(validate_count(
        conditions.len(),
        min,
        max,
        &format!("{name} output unlock conditions"),
    ));

    if conditions
        .iter()
        .any(|condition| !rules.unlock_condition_kinds.contains(&condition.kind()))
    {
        report.push_error(format!(
            "{name} output unlock condition type of an unlock condition must define one of the following types: {}.",
            condition_names(rules.unlock_condition_kinds)
        ));
    }

    if let Some(required) = rules.required_unlock_condition {
        let present = conditions.iter().any(|condition| condition.kind() == required);
        report.ensure(present, || match required {
            UnlockConditionKind::Address => {
                format!("{name} output unlock conditions must define an Address Unlock Condition.")
            }
            other => format!("{name} output {} must be present.", other.name()),
        });
    }

    report.absorb(validate_unlock_conditions(conditions, output.amount(), params));

    if features
        .iter()
        .any(|feature| !rules.feature_kinds.contains(&feature.kind()))
    {
        report.push_error(format!(
            "{name} output feature type of a feature must define one of the following types: {}.",
            feature_names(rules.feature_kinds)
        ));
    }
    report.absorb(validate_features(features, rules.feature_kinds.len()));

    if immutable_features
        .iter()
        .any(|feature| !rules.immutable_feature_kinds.contains(&feature.kind()))
    {
        report.push_error(format!(
            "{name} output feature type of an Immutable Feature must define one of the following types: {}.",
            feature_names(rules.immutable_feature_kinds)
        ));
    }
    report.absorb(validate_features(
        immutable_features,
        rules.immutable_feature_kinds.len(),
    ));

    report.absorb(validate_native_tokens(output.native_tokens()));

    report
}

fn validate_alias(alias: &AliasOutput) -> ValidationReport {
    let mut report = ValidationReport::ok();
    let own_address = Address::Alias(alias.alias_id);

    let self_controlled = alias.unlock_conditions.iter().any(|condition| {
        matches!(
            condition,
            UnlockCondition::StateControllerAddress { address }
                | UnlockCondition::GovernorAddress { address } if *address == own_address
        )
    });
    report.ensure(!self_controlled, || {
        "Alias output Address field of the State Controller Address Unlock Condition and Governor Address Unlock Condition must not be the same as the Alias address derived from Alias ID.".to_string()
    });

    if alias.alias_id.is_zero() {
        report.ensure(alias.state_index == 0 && alias.foundry_counter == 0, || {
            "When Alias ID is zeroed out, State Index and Foundry Counter must be 0.".to_string()
        });
    }

    report.ensure(alias.state_metadata.len() <= MAX_METADATA_LENGTH, || {
        "Length of state metadata must not be greater than max metadata length.".to_string()
    });

    report
}

fn validate_foundry(foundry: &FoundryOutput) -> ValidationReport {
    match &foundry.token_scheme {
        TokenScheme::Simple(scheme) => validate_simple_token_scheme(scheme),
    }
}

pub fn validate_simple_token_scheme(scheme: &SimpleTokenScheme) -> ValidationReport {
    let mut report = ValidationReport::ok();

    report.ensure(!scheme.maximum_supply.is_zero(), || {
        "Simple Token Scheme maximum supply must be larger than zero.".to_string()
    });
    report.ensure(scheme.melted_tokens <= scheme.minted_tokens, || {
        "Simple Token Scheme melted tokens must not be greater than minted tokens.".to_string()
    });
    // Only meaningful once melted <= minted holds
    if scheme.melted_tokens <= scheme.minted_tokens {
        report.ensure(
            scheme.minted_tokens - scheme.melted_tokens <= scheme.maximum_supply,
            || {
                "Simple Token Scheme circulating supply must not be greater than maximum supply."
                    .to_string()
            },
        );
    }

    report
}

fn validate_nft(nft: &NftOutput) -> ValidationReport {
    let own_address = Address::Nft(nft.nft_id);
    let self_owned = nft.unlock_conditions.iter().any(|condition| {
        matches!(condition, UnlockCondition::Address { address } if *address == own_address)
    });
    if self_owned {
        ValidationReport::fail(
            "NFT output Address field of the Address Unlock Condition must not be the same as the NFT address derived from NFT ID.",
        )
    } else {
        ValidationReport::ok()
    }
}

fn condition_names(kinds: &[UnlockConditionKind]) -> String {
    kinds.iter().map(|kind| kind.name()).collect::<Vec<_>>().join(", ")
}

fn feature_names(kinds: &[FeatureKind]) -> String {
    kinds.iter().map(|kind| kind.name()).collect::<Vec<_>>().join(", ")
}
