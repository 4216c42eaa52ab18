//! Bearer credential validation.
//!
//! The only input the client checks locally. Everything else is left to the
//! service's own error responses.

use crate::error::{ConfigurationFailure, ExtractError};

use common::BearerToken;

use reqwest::header::HeaderValue;

/// Token shipped in sample code in place of a real key.
pub const API_KEY_PLACEHOLDER: &str = "%%API_KEY%%";

/// Check a raw key without taking ownership of it.
pub fn validate(key: &str) -> Result<(), ConfigurationFailure> {
    if key.trim().is_empty() {
        return Err(ConfigurationFailure::EmptyCredential);
    }

    if key.contains(API_KEY_PLACEHOLDER) {
        return Err(ConfigurationFailure::PlaceholderCredential {
            placeholder: API_KEY_PLACEHOLDER,
        });
    }

    // Must survive being placed in `Authorization: Bearer <key>`
    if HeaderValue::from_str(&format!("Bearer {key}")).is_err() {
        return Err(ConfigurationFailure::InvalidCredentialHeader);
    }

    Ok(())
}

/// Validate a key and wrap it so it can no longer leak through Debug or logs.
///
/// The key is stored as given; surrounding whitespace is only trimmed for the
/// emptiness check.
#[track_caller]
pub fn validate_and_wrap(key: String) -> Result<BearerToken, ExtractError> {
    match validate(&key) {
        Ok(()) => Ok(BearerToken::new(key)),
        Err(reason) => Err(ExtractError::configuration(reason)),
    }
}
