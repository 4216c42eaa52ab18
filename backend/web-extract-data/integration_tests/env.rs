use web_extract_data::config::{API_KEY_ENV, BASE_URL_ENV};
use web_extract_data::{ConfigurationFailure, ExtractError, WebExtractClient};

use serde_json::json;
use serial_test::serial;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn set_env(key: &str, value: &str) {
    // SAFETY: env tests are serialized with #[serial]
    unsafe { std::env::set_var(key, value) }
}

fn clear_env(key: &str) {
    // SAFETY: env tests are serialized with #[serial]
    unsafe { std::env::remove_var(key) }
}

/// **VALUE**: Verifies a missing key variable is a configuration error naming it.
///
/// **WHY THIS MATTERS**: The message must tell the user which variable to set.
///
/// **BUG THIS CATCHES**: Would catch if a missing variable becomes an empty key
/// with a less specific message.
#[test]
#[serial]
fn given_missing_key_variable_when_building_from_env_then_names_variable() {
    clear_env(API_KEY_ENV);
    clear_env(BASE_URL_ENV);

    let err = WebExtractClient::from_env().unwrap_err();

    match err {
        ExtractError::Configuration { reason, .. } => assert_eq!(
            reason,
            ConfigurationFailure::MissingEnvVar {
                name: "INSTANTAPI_KEY"
            }
        ),
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
#[serial]
fn given_placeholder_key_variable_when_building_from_env_then_rejects() {
    set_env(API_KEY_ENV, "%%API_KEY%%");
    clear_env(BASE_URL_ENV);

    let result = WebExtractClient::from_env();
    clear_env(API_KEY_ENV);

    assert!(matches!(result, Err(ExtractError::Configuration { .. })));
}

/// **VALUE**: Verifies env-built clients use the key and base URL override.
///
/// **WHY THIS MATTERS**: Staging gateways are selected through `INSTANTAPI_BASE_URL`.
///
/// **BUG THIS CATCHES**: Would catch if the override is read but not applied.
#[tokio::test]
#[serial]
async fn given_env_key_and_base_url_when_calling_then_uses_both() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/next/"))
        .and(header("authorization", "Bearer env-key-789"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"next": []})))
        .expect(1)
        .mount(&server)
        .await;

    set_env(API_KEY_ENV, "env-key-789");
    set_env(BASE_URL_ENV, &server.uri());

    let client = WebExtractClient::from_env();
    clear_env(API_KEY_ENV);
    clear_env(BASE_URL_ENV);

    let result = client.unwrap().next("https://example.com").await.unwrap();
    assert_eq!(result["next"], json!([]));
}

/// **VALUE**: Verifies a non-unicode base URL override is reported, not ignored.
///
/// **WHY THIS MATTERS**: Silently falling back to the public service sends traffic
/// and the credential somewhere the caller did not configure.
///
/// **BUG THIS CATCHES**: Would catch an `if let Ok(..)` that drops the `NotUnicode` case.
#[cfg(unix)]
#[test]
#[serial]
fn given_non_unicode_base_url_variable_when_building_from_env_then_names_variable() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    set_env(API_KEY_ENV, "env-key-789");
    // SAFETY: env tests are serialized with #[serial]
    unsafe { std::env::set_var(BASE_URL_ENV, OsString::from_vec(vec![b'h', 0xff])) }

    let result = WebExtractClient::from_env();
    clear_env(API_KEY_ENV);
    clear_env(BASE_URL_ENV);

    match result {
        Err(ExtractError::Configuration { reason, .. }) => assert_eq!(
            reason,
            ConfigurationFailure::NonUnicodeEnvVar {
                name: "INSTANTAPI_BASE_URL"
            }
        ),
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[cfg(unix)]
#[test]
#[serial]
fn given_non_unicode_key_variable_when_building_from_env_then_names_variable() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    clear_env(BASE_URL_ENV);
    // SAFETY: env tests are serialized with #[serial]
    unsafe { std::env::set_var(API_KEY_ENV, OsString::from_vec(vec![b'k', 0xfe])) }

    let result = WebExtractClient::from_env();
    clear_env(API_KEY_ENV);

    assert!(matches!(
        result,
        Err(ExtractError::Configuration {
            reason: ConfigurationFailure::NonUnicodeEnvVar { name: "INSTANTAPI_KEY" },
            ..
        })
    ));
}
