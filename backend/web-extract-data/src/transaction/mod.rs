//! The single request/response cycle every operation goes through.
//!
//! One POST, one response, one classification. There is no retry loop and no
//! fallback value: whatever the classification yields is what the caller gets.

use crate::config::ClientConfig;
use crate::error::{ConfigurationFailure, ExtractError};

use common::{BearerToken, HttpStatusCode};
use models::Operation;

use log::{debug, warn};
use reqwest::Client;
use serde_json::{Map, Value};
use url::Url;

/// Successful response body: the service's JSON object, untouched.
pub type JsonObject = Map<String, Value>;

const ENVELOPE_ERROR_KEY: &str = "error";
const ENVELOPE_REASON_KEY: &str = "reason";

/// Sends operation payloads to the service and classifies what comes back.
#[derive(Debug, Clone)]
pub struct Transaction {
    base_url: Url,
    client: Client,
}

impl Transaction {
    #[track_caller]
    pub fn new(config: &ClientConfig) -> Result<Self, ExtractError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            ExtractError::configuration(ConfigurationFailure::InvalidBaseUrl {
                message: format!("{}: {}", config.base_url, e),
            })
        })?;

        let mut builder = Client::builder().user_agent(config.user_agent());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| {
            ExtractError::configuration(ConfigurationFailure::ClientBuild {
                message: e.to_string(),
            })
        })?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Run one transaction for `payload`.
    ///
    /// # Errors
    /// - [`ExtractError::Network`] if no response was obtained
    /// - [`ExtractError::Protocol`] if the body is not a JSON object
    /// - [`ExtractError::Application`] if the body is an error envelope, whatever the status
    /// - [`ExtractError::Http`] for any other non-200 status
    pub async fn execute<O: Operation>(
        &self,
        api_key: &BearerToken,
        payload: &O,
    ) -> Result<JsonObject, ExtractError> {
        let url = self.base_url.join(O::ENDPOINT)?;

        debug!("Sending {} transaction to {}", O::NAME, url);

        let response = self
            .client
            .post(url)
            .bearer_auth(api_key.expose())
            .json(payload)
            .send()
            .await?;

        let status = HttpStatusCode(response.status().as_u16());
        let body = response.text().await?;

        debug!(
            "Received HTTP {} for {} transaction ({} bytes)",
            status,
            O::NAME,
            body.len()
        );

        let outcome = classify(status, &body);
        if let Err(e) = &outcome {
            warn!(
                "{} transaction failed ({}): {}",
                O::NAME,
                e.error_category(),
                e
            );
        }
        outcome
    }
}

/// Turn a received status and body into the transaction outcome.
///
/// Order matters: an error envelope wins over the status code, so a 200
/// carrying `{"error": true, "reason": ...}` is still a failure.
pub fn classify(status: HttpStatusCode, body: &str) -> Result<JsonObject, ExtractError> {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            return Err(ExtractError::protocol(
                status,
                format!("response body is not valid JSON: {e}"),
                body,
            ));
        }
    };

    if let Some(reason) = envelope_reason(&value) {
        return Err(ExtractError::application(reason, status));
    }

    if !status.is_ok() {
        return Err(ExtractError::http(status, body));
    }

    match value {
        Value::Object(object) => Ok(object),
        other => Err(ExtractError::protocol(
            status,
            format!("expected a JSON object, got {}", json_kind(&other)),
            body,
        )),
    }
}

/// Reason text when `value` is an error envelope: `error` is exactly `true`
/// and `reason` is present and non-null.
fn envelope_reason(value: &Value) -> Option<String> {
    let object = value.as_object()?;

    if object.get(ENVELOPE_ERROR_KEY) != Some(&Value::Bool(true)) {
        return None;
    }

    match object.get(ENVELOPE_REASON_KEY)? {
        Value::Null => None,
        Value::String(reason) => Some(reason.clone()),
        other => Some(other.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
