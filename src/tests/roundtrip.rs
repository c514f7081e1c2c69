//! Serde round-trip tests, in particular sentinel rehydration.

use crate::{settle, settle_optional, NotAnError, Outcome, OptionalOutcome};

use super::common::TestError;

/// A successful outcome survives a round trip, and its error slot comes back
/// as the one shared sentinel instance, not a copy.
#[test]
fn success_round_trip_rehydrates_sentinel() {
    let outcome = settle(|| Ok::<_, TestError>(12));

    let json = serde_json::to_string(&outcome).expect("serialize should succeed");
    let back: Outcome<i32, TestError> =
        serde_json::from_str(&json).expect("deserialize should succeed");

    assert_eq!(back, outcome);
    let sentinel = back.error.sentinel().expect("should hold the sentinel");
    assert!(std::ptr::eq(sentinel, NotAnError::shared()));
}

/// A failed outcome round-trips with the error value intact.
#[test]
fn failure_round_trip_keeps_error() {
    let outcome = settle(|| Err::<i32, _>(TestError::WithMessage("kept".into())));

    let json = serde_json::to_string(&outcome).expect("serialize should succeed");
    let back: Outcome<i32, TestError> =
        serde_json::from_str(&json).expect("deserialize should succeed");

    assert!(!back.success);
    assert_eq!(back.raised(), Some(&TestError::WithMessage("kept".into())));
}

/// The sentinel serializes without a payload.
#[test]
fn sentinel_has_no_wire_payload() {
    let outcome = settle(|| Ok::<_, TestError>(1));
    let json = serde_json::to_string(&outcome).expect("serialize should succeed");

    assert!(json.contains("\"NotAnError\""));
    assert!(!json.contains("not an error"));
}

/// The nullable-error shape round-trips in all three states.
#[test]
fn optional_outcome_round_trips() {
    for outcome in [
        settle_optional(|| Ok::<Option<i32>, TestError>(None)),
        settle_optional(|| Ok::<_, TestError>(Some(4))),
        settle_optional(|| Err::<Option<i32>, _>(TestError::Simple)),
    ] {
        let json = serde_json::to_string(&outcome).expect("serialize should succeed");
        let back: OptionalOutcome<i32, TestError> =
            serde_json::from_str(&json).expect("deserialize should succeed");
        assert_eq!(back, outcome);
    }
}
