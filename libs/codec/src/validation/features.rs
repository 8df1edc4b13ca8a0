//! Feature list rules.
//!
//! Which feature kinds an output may carry is decided by the output rules in
//! [`super::outputs`]; this module checks the list shape and the byte
//! lengths of metadata and tag bodies.

use super::report::ValidationReport;
use super::rules::{validate_ascending_order, validate_distinct};
use crate::constants::{MAX_METADATA_LENGTH, MAX_TAG_LENGTH};
use tangle_types::Feature;

pub fn validate_features(features: &[Feature], max_count: usize) -> ValidationReport {
    let mut report = ValidationReport::ok();

    report.ensure(features.len() <= max_count, || {
        format!("Features count must be between 0 and {max_count}.")
    });

    let kinds: Vec<_> = features.iter().map(Feature::kind).collect();
    report.absorb(validate_distinct(&kinds, "Output", "feature"));
    report.absorb(validate_ascending_order(&kinds, "Output", "Feature"));

    for feature in features {
        report.absorb(validate_feature(feature));
    }

    report
}

pub fn validate_feature(feature: &Feature) -> ValidationReport {
    let mut report = ValidationReport::ok();
    match feature {
        Feature::Sender { .. } | Feature::Issuer { .. } => {}
        Feature::Metadata { data } => {
            report.ensure(!data.is_empty(), || {
                "Metadata feature data field must be greater than zero.".to_string()
            });
            report.ensure(data.len() <= MAX_METADATA_LENGTH, || {
                "Metadata length must not be greater than Max Metadata Length.".to_string()
            });
        }
        Feature::Tag { tag } => {
            report.ensure(!tag.is_empty(), || {
                "Tag feature tag field must be greater than zero.".to_string()
            });
            report.ensure(tag.len() <= MAX_TAG_LENGTH, || {
                "Tag length must not be greater than Max Tag Length.".to_string()
            });
        }
    }
    report
}
