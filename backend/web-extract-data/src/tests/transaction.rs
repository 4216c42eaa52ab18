// Unit tests for response classification
// Covers the envelope-before-status ordering without a network

use crate::error::ExtractError;
use crate::transaction::classify;

use common::HttpStatusCode;
use serde_json::json;

/// **VALUE**: Verifies an error envelope on a 200 response is a failure.
///
/// **WHY THIS MATTERS**: The service reports semantic failures ("unscrapable page")
/// with status 200. Treating them as success hands callers an error body as data.
///
/// **BUG THIS CATCHES**: Would catch if the status check is moved before the
/// envelope check.
#[test]
fn given_200_with_error_envelope_when_classifying_then_returns_application_error() {
    // GIVEN: Status 200 carrying an envelope
    let body = r#"{"error": true, "reason": "blocked"}"#;

    // WHEN: Classifying
    let result = classify(HttpStatusCode(200), body);

    // THEN: Application error with the service reason
    match result {
        Err(ExtractError::Application {
            reason,
            status_code,
            ..
        }) => {
            assert_eq!(reason, "blocked");
            assert_eq!(status_code, HttpStatusCode(200));
        }
        other => panic!("Expected Application error, got {other:?}"),
    }
}

/// **VALUE**: Verifies the envelope also wins over a non-200 status.
///
/// **WHY THIS MATTERS**: The reason text is more actionable than a bare status code.
///
/// **BUG THIS CATCHES**: Would catch a regression that reports `HttpError(400, ...)`
/// and drops the reason.
#[test]
fn given_400_with_error_envelope_when_classifying_then_returns_application_error() {
    let body = r#"{"error": true, "reason": "Invalid URL"}"#;

    let err = classify(HttpStatusCode(400), body).unwrap_err();

    assert_eq!(err.reason(), Some("Invalid URL"));
    assert_eq!(err.status_code(), Some(400));
}

/// **VALUE**: Verifies a 500 without an envelope becomes an HTTP error with the raw body.
///
/// **WHY THIS MATTERS**: Callers need the status and the body text to diagnose outages.
///
/// **BUG THIS CATCHES**: Would catch if the body is dropped or re-serialized.
#[test]
fn given_500_without_envelope_when_classifying_then_returns_http_error() {
    let body = r#"{"detail": "internal failure"}"#;

    match classify(HttpStatusCode(500), body) {
        Err(ExtractError::Http {
            status_code,
            body: raw,
            ..
        }) => {
            assert_eq!(status_code, HttpStatusCode(500));
            assert_eq!(raw, body);
        }
        other => panic!("Expected Http error, got {other:?}"),
    }
}

/// **VALUE**: Verifies envelopes are only recognised when both conditions hold.
///
/// **WHY THIS MATTERS**: `error: false`, `error: "true"` or a null reason are not
/// failures; on a 200 they must come back as data.
///
/// **BUG THIS CATCHES**: Would catch truthiness checks (`"true"` string) or a
/// missing null check on `reason`.
#[test]
fn given_partial_envelopes_when_classifying_200_then_returns_body() {
    let bodies = [
        json!({"error": false, "reason": "ignored"}),
        json!({"error": "true", "reason": "ignored"}),
        json!({"error": true, "reason": null}),
        json!({"error": true}),
        json!({"reason": "no flag"}),
    ];

    for body in bodies {
        let text = body.to_string();
        let result = classify(HttpStatusCode(200), &text)
            .unwrap_or_else(|e| panic!("{text} should succeed, got {e}"));
        assert_eq!(serde_json::Value::Object(result), body);
    }
}

/// **VALUE**: Verifies a successful body is returned unchanged.
///
/// **WHY THIS MATTERS**: The result shape is defined by the caller's field descriptions;
/// the client must not reshape it.
///
/// **BUG THIS CATCHES**: Would catch unwrapping of the `scrape` key or number coercion.
#[test]
fn given_200_with_result_when_classifying_then_returns_body_unchanged() {
    let body = json!({"scrape": {"price": 199.99, "brand": "MSI"}});

    let result = classify(HttpStatusCode(200), &body.to_string()).unwrap();

    assert_eq!(serde_json::Value::Object(result), body);
}

/// **VALUE**: Verifies a non-JSON body is a protocol error, not a panic.
///
/// **WHY THIS MATTERS**: Proxies and load balancers return HTML error pages.
///
/// **BUG THIS CATCHES**: Would catch an `unwrap()` on the parse or a misclassification
/// as an HTTP error that loses the parse failure.
#[test]
fn given_malformed_body_when_classifying_then_returns_protocol_error() {
    let body = "<html><body>Bad Gateway</body></html>";

    match classify(HttpStatusCode(502), body) {
        Err(ExtractError::Protocol {
            status_code,
            body: raw,
            message,
            ..
        }) => {
            assert_eq!(status_code, HttpStatusCode(502));
            assert_eq!(raw, body);
            assert!(message.contains("not valid JSON"));
        }
        other => panic!("Expected Protocol error, got {other:?}"),
    }
}

#[test]
fn given_200_with_non_object_json_when_classifying_then_returns_protocol_error() {
    for body in ["[1, 2, 3]", "\"ok\"", "null", ""] {
        let err = classify(HttpStatusCode(200), body).unwrap_err();
        assert!(
            matches!(err, ExtractError::Protocol { .. }),
            "{body:?} should be a protocol error, got {err}"
        );
    }
}

#[test]
fn given_non_string_reason_when_classifying_then_reason_is_rendered_as_json() {
    let err = classify(HttpStatusCode(200), r#"{"error": true, "reason": {"code": 7}}"#)
        .unwrap_err();

    assert_eq!(err.reason(), Some(r#"{"code":7}"#));
}

#[test]
fn given_404_with_non_object_json_when_classifying_then_returns_http_error() {
    let err = classify(HttpStatusCode(404), "[]").unwrap_err();

    assert!(matches!(err, ExtractError::Http { .. }));
}
