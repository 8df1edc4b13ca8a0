//! Message-level rules.

use super::payloads::{validate_parents, validate_payload};
use super::report::ValidationReport;
use tangle_config::ProtocolParameters;
use tangle_types::Message;
use tracing::debug;

pub fn validate_message(message: &Message, params: &ProtocolParameters) -> ValidationReport {
    let mut report = validate_parents(&message.parents, "Message");

    if let Some(payload) = &message.payload {
        report.ensure(payload.kind().allowed_in_message(), || {
            "Message payload type must be one of the following: Transaction, Milestone, Indexation."
                .to_string()
        });
    }
    report.absorb(validate_payload(message.payload.as_ref(), params));

    report.ensure(message.network_id == params.network_id(), || {
        format!(
            "Message network id {} does not match network {}.",
            message.network_id, params.network_name
        )
    });

    debug!(
        valid = report.is_valid,
        errors = report.errors.len(),
        "Validated message"
    );
    report
}
