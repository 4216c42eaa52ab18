// Unit tests for the error taxonomy
// Location tracking, categories, and caller-side retry hints

use crate::error::{ConfigError, ConfigurationFailure, ExtractError};

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

/// **VALUE**: Verifies error messages include the location they were raised from.
///
/// **WHY THIS MATTERS**: All four operations share one executor; without a location
/// there is no telling which classification branch produced the error.
///
/// **BUG THIS CATCHES**: Would catch if `#[track_caller]` is removed from a constructor
/// or the Display format drops `{location}`.
#[test]
fn given_constructor_error_when_formatted_then_includes_call_site() {
    // GIVEN: An error raised from this file
    let err = ExtractError::http(HttpStatusCode(500), "boom");

    // WHEN: Formatting
    let message = err.to_string();

    // THEN: Kind, status, body, and this file are all present
    assert!(message.starts_with("HTTP Error: 500 - boom"));
    assert!(message.contains("error.rs"), "location missing: {message}");
}

/// **VALUE**: Verifies category strings for every transport and response kind.
///
/// **WHY THIS MATTERS**: Callers key metrics and alerting off these strings.
///
/// **BUG THIS CATCHES**: Would catch guard ordering mistakes in `error_category()`.
#[test]
fn given_each_error_kind_when_categorized_then_returns_stable_label() {
    let location = ErrorLocation::from(Location::caller());
    let timeout = ExtractError::Network {
        message: "timed out".into(),
        is_timeout: true,
        is_connection: false,
        location,
    };
    let refused = ExtractError::Network {
        message: "refused".into(),
        is_timeout: false,
        is_connection: true,
        location,
    };

    assert_eq!(timeout.error_category(), "timeout");
    assert_eq!(refused.error_category(), "connection");
    assert_eq!(
        ExtractError::configuration(ConfigurationFailure::EmptyCredential).error_category(),
        "configuration"
    );
    assert_eq!(
        ExtractError::application("blocked", HttpStatusCode(200)).error_category(),
        "application"
    );
    assert_eq!(
        ExtractError::http(HttpStatusCode(401), "").error_category(),
        "client_error"
    );
    assert_eq!(
        ExtractError::http(HttpStatusCode(503), "").error_category(),
        "server_error"
    );
    assert_eq!(
        ExtractError::protocol(HttpStatusCode(200), "bad", "x").error_category(),
        "protocol"
    );
}

/// **VALUE**: Verifies only transient failures are advertised as retryable.
///
/// **WHY THIS MATTERS**: The client never retries; callers that do rely on this hint.
/// Re-sending a rejected credential or an unscrapable page only burns quota.
///
/// **BUG THIS CATCHES**: Would catch if application or configuration errors become retryable.
#[test]
fn given_errors_when_checking_retryable_then_only_transient_failures_qualify() {
    assert!(ExtractError::http(HttpStatusCode(503), "").is_retryable());
    assert!(!ExtractError::http(HttpStatusCode(500), "").is_retryable());
    assert!(!ExtractError::application("blocked", HttpStatusCode(503)).is_retryable());
    assert!(
        !ExtractError::configuration(ConfigurationFailure::PlaceholderCredential {
            placeholder: "%%API_KEY%%"
        })
        .is_retryable()
    );
}

#[test]
fn given_config_error_when_converted_then_becomes_configuration_error() {
    let config_error = ConfigError::ValidationError {
        location: ErrorLocation::from(Location::caller()),
        reason: "base_url cannot be empty".to_string(),
    };

    let err = ExtractError::from(config_error);

    match err {
        ExtractError::Configuration {
            reason: ConfigurationFailure::InvalidConfig { message },
            ..
        } => assert!(message.contains("base_url cannot be empty")),
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
fn given_configuration_failures_when_displayed_then_never_include_key_material() {
    let rendered = ExtractError::configuration(ConfigurationFailure::InvalidCredentialHeader)
        .to_string();

    assert!(rendered.contains("not allowed in an HTTP header"));
    assert_eq!(
        ConfigurationFailure::MissingEnvVar {
            name: "INSTANTAPI_KEY"
        }
        .to_string(),
        "environment variable INSTANTAPI_KEY is not set"
    );
}
