use crate::helpers::{TEST_API_KEY, client_for, unreachable_base_url};

use web_extract_data::{ClientConfig, ExtractError, HttpStatusCode, WebExtractClient};

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies an error envelope on a 200 response fails the call.
///
/// **WHY THIS MATTERS**: The service reports unscrapable pages with status 200.
///
/// **BUG THIS CATCHES**: Would catch if status is checked before the envelope.
#[tokio::test]
async fn given_200_error_envelope_when_scraping_then_returns_application_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/scrape/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"error": true, "reason": "blocked"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let err = client
        .scrape("https://example.com", Default::default())
        .await
        .unwrap_err();

    match err {
        ExtractError::Application {
            reason,
            status_code,
            ..
        } => {
            assert_eq!(reason, "blocked");
            assert_eq!(status_code, HttpStatusCode(200));
        }
        other => panic!("Expected Application error, got {other:?}"),
    }
}

/// **VALUE**: Verifies a 500 without envelope surfaces status and raw body.
///
/// **WHY THIS MATTERS**: This is the only signal callers get during an outage.
///
/// **BUG THIS CATCHES**: Would catch if the body is lost or the status ignored.
#[tokio::test]
async fn given_500_without_envelope_when_calling_then_returns_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/links/"))
        .respond_with(ResponseTemplate::new(500).set_body_string(r#"{"detail":"oops"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let err = client
        .links("https://example.com", "anything")
        .await
        .unwrap_err();

    match err {
        ExtractError::Http {
            status_code, body, ..
        } => {
            assert_eq!(status_code, HttpStatusCode(500));
            assert_eq!(body, r#"{"detail":"oops"}"#);
        }
        other => panic!("Expected Http error, got {other:?}"),
    }
}

/// **VALUE**: Verifies a refused connection is a network error.
///
/// **WHY THIS MATTERS**: Callers retry network errors and not HTTP/application ones.
/// Misclassifying would either hide outages or retry permanent failures.
///
/// **BUG THIS CATCHES**: Would catch if transport faults fall through to response parsing.
#[tokio::test]
async fn given_unreachable_service_when_calling_then_returns_network_error() {
    let config = ClientConfig::default().with_base_url(unreachable_base_url());
    let client = WebExtractClient::with_config(TEST_API_KEY, &config).unwrap();

    let err = client.next("https://example.com").await.unwrap_err();

    match &err {
        ExtractError::Network { is_connection, .. } => {
            assert!(*is_connection, "refused connection should set is_connection");
        }
        other => panic!("Expected Network error, got {other:?}"),
    }
    assert_eq!(err.status_code(), None);
    assert!(err.is_retryable());
}

#[tokio::test]
async fn given_html_error_page_when_calling_then_returns_protocol_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/search/"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let err = client.search("rust", None, None).await.unwrap_err();

    assert!(matches!(err, ExtractError::Protocol { .. }));
    assert_eq!(err.status_code(), Some(502));
}

/// **VALUE**: Verifies a configured timeout is applied and reported as a network error.
///
/// **WHY THIS MATTERS**: Timeouts are opt-in configuration; when set they must bound
/// the call and be recognisable as timeouts.
///
/// **BUG THIS CATCHES**: Would catch if the configured timeout is never passed to the transport.
#[tokio::test]
async fn given_configured_timeout_when_service_is_slow_then_returns_timeout_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/next/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"next": []}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = ClientConfig::default()
        .with_base_url(server.uri())
        .with_timeout(Duration::from_secs(1));
    let client = WebExtractClient::with_config(TEST_API_KEY, &config).unwrap();

    let err = client.next("https://example.com").await.unwrap_err();

    assert!(matches!(err, ExtractError::Network { is_timeout: true, .. }));
    assert_eq!(err.error_category(), "timeout");
}

/// **VALUE**: Verifies a rejected key never reaches the network.
///
/// **WHY THIS MATTERS**: Placeholder keys must fail fast and cost nothing.
///
/// **BUG THIS CATCHES**: Would catch if construction succeeds and the error only
/// shows up as a 401 later.
#[tokio::test]
async fn given_placeholder_key_when_constructing_then_no_request_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let config = ClientConfig::default().with_base_url(server.uri());
    let result = WebExtractClient::with_config("%%API_KEY%%", &config);

    assert!(matches!(result, Err(ExtractError::Configuration { .. })));
}
