//! Display output of codec errors, which callers surface verbatim.

use tangle_codec::ProtocolError;

#[test]
fn test_minimum_length_formatting() {
    let error = ProtocolError::minimum_length("Message", 12, 53);
    assert_eq!(
        error.to_string(),
        "Message data is 12 in length which is less than the minimum size required of 53"
    );
    assert!(error.is_short_buffer());
}

#[test]
fn test_unrecognized_and_mismatch_formatting() {
    assert_eq!(
        ProtocolError::unrecognized("output", 9u8).to_string(),
        "Unrecognized output type 9"
    );
    assert_eq!(
        ProtocolError::type_mismatch("Alias Output", 3u8).to_string(),
        "Type mismatch in Alias Output 3"
    );
}

#[test]
fn test_structural_error_formatting() {
    let trailing = ProtocolError::TrailingBytes {
        total: 60,
        unused: 7,
    };
    assert_eq!(trailing.to_string(), "Message data length 60 has unused data 7");
    assert!(!trailing.is_short_buffer());

    let nested = ProtocolError::PayloadNotAllowed {
        context: "Milestone",
        kind: "Indexation",
    };
    assert_eq!(nested.to_string(), "Milestone can not contain a Indexation payload");

    let count = ProtocolError::count_out_of_range("parents", 9, 1, 8);
    assert_eq!(
        count.to_string(),
        "parents count 9 is outside the allowed range 1..=8"
    );
}

#[test]
fn test_debug_names_variant() {
    let error = ProtocolError::short_buffer("message.nonce", 8, 3);
    let debug = format!("{error:?}");
    assert!(debug.contains("ShortBuffer"));
    assert!(debug.contains("message.nonce"));
    assert_eq!(
        error.to_string(),
        "message.nonce length 8 exceeds the remaining data 3"
    );
}
