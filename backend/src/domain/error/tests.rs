//! Tests for the domain error payload and its serialisation contract.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
fn internal_constructor_sets_code() {
    let err = Error::internal("boom");
    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.to_string(), "boom");
}

#[rstest]
#[case("")]
#[case("   ")]
fn try_new_rejects_empty_messages(#[case] message: &str) {
    let result = Error::try_new(ErrorCode::InternalError, message);
    assert!(matches!(result, Err(ErrorValidationError::EmptyMessage)));
}

#[rstest]
fn try_with_trace_id_rejects_empty_values() {
    let result = Error::internal("missing").try_with_trace_id("   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyTraceId)));
}

#[rstest]
fn new_returns_none_when_trace_id_out_of_scope() {
    assert!(Error::internal("boom").trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn new_captures_trace_id_in_scope(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id
        .parse()
        .expect("fixtures provide a valid UUID");
    let error = TraceId::scope(trace_id, async move { Error::internal("boom") }).await;

    assert_eq!(error.trace_id(), Some(expected_trace_id.as_str()));
}

#[rstest]
#[tokio::test]
async fn deserialised_errors_ignore_ambient_trace(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id
        .parse()
        .expect("fixtures provide a valid UUID");
    let payload = json!({"code": "internal_error", "message": "missing"});

    let error: Error = TraceId::scope(trace_id, async move {
        serde_json::from_value(payload).expect("valid payload")
    })
    .await;

    assert!(error.trace_id().is_none());
}

#[rstest]
fn serialises_with_camel_case_trace_and_details(expected_trace_id: String) {
    let error = Error::internal("boom")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({"operation": "list"}));

    let value = serde_json::to_value(&error).expect("serialises");

    assert_eq!(
        value,
        json!({
            "code": "internal_error",
            "message": "boom",
            "traceId": expected_trace_id,
            "details": {"operation": "list"},
        })
    );
}

#[rstest]
#[case("not_found")]
#[case("InternalError")]
fn deserialisation_rejects_unknown_codes(#[case] code: &str) {
    let payload = json!({"code": code, "message": "missing"});
    assert!(serde_json::from_value::<Error>(payload).is_err());
}

#[rstest]
fn deserialisation_rejects_blank_messages() {
    let payload = json!({"code": "internal_error", "message": " "});
    assert!(serde_json::from_value::<Error>(payload).is_err());
}
