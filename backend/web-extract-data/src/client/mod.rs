use crate::config::{API_KEY_ENV, BASE_URL_ENV, ClientConfig};
use crate::credential;
use crate::error::{ConfigurationFailure, ExtractError};
use crate::transaction::{JsonObject, Transaction};

use common::BearerToken;
use models::{LinksRequest, NextRequest, Operation, ScrapeFields, ScrapeRequest, SearchRequest};

use std::env;

use log::{debug, info, warn};
use url::Url;

/// Client for the InstantAPI.ai extraction service.
///
/// Holds the credential and a configured transport; no state is accumulated
/// between calls, so one instance can be cloned or shared across tasks.
#[derive(Debug, Clone)]
pub struct WebExtractClient {
    api_key: BearerToken,
    transaction: Transaction,
}

impl WebExtractClient {
    /// Create a client against the public service with default transport settings.
    ///
    /// # Errors
    /// Returns [`ExtractError::Configuration`] if the key is empty, whitespace,
    /// or still the `%%API_KEY%%` placeholder. No request is made.
    #[track_caller]
    pub fn new(api_key: impl Into<String>) -> Result<Self, ExtractError> {
        Self::with_config(api_key, &ClientConfig::default())
    }

    /// Create a client with explicit transport settings.
    ///
    /// The credential is checked before the config, so a bad key is always
    /// reported as such.
    #[track_caller]
    pub fn with_config(
        api_key: impl Into<String>,
        config: &ClientConfig,
    ) -> Result<Self, ExtractError> {
        let api_key = credential::validate_and_wrap(api_key.into())?;
        config.validate()?;
        let transaction = Transaction::new(config)?;

        debug!(
            "Extraction client ready for {} ({} char key)",
            transaction.base_url(),
            api_key.len()
        );

        Ok(Self {
            api_key,
            transaction,
        })
    }

    /// Create a client from `INSTANTAPI_KEY`, loading a `.env` file from the
    /// working directory first if there is one.
    ///
    /// `INSTANTAPI_BASE_URL`, when set, replaces the default base URL.
    #[track_caller]
    pub fn from_env() -> Result<Self, ExtractError> {
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded .env from: {:?}", path),
            Err(e) if e.not_found() => {
                debug!("No .env file found - will check existing environment variables")
            }
            Err(e) => warn!("Failed to parse .env: {}", e),
        }

        let api_key = match env::var(API_KEY_ENV) {
            Ok(value) => value,
            Err(env::VarError::NotPresent) => {
                return Err(ExtractError::configuration(
                    ConfigurationFailure::MissingEnvVar { name: API_KEY_ENV },
                ));
            }
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ExtractError::configuration(
                    ConfigurationFailure::NonUnicodeEnvVar { name: API_KEY_ENV },
                ));
            }
        };

        let mut config = ClientConfig::default();
        match env::var(BASE_URL_ENV) {
            Ok(base_url) => {
                debug!("Using {} override: {}", BASE_URL_ENV, base_url);
                config = config.with_base_url(base_url);
            }
            Err(env::VarError::NotPresent) => {}
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ExtractError::configuration(
                    ConfigurationFailure::NonUnicodeEnvVar { name: BASE_URL_ENV },
                ));
            }
        }

        Self::with_config(api_key, &config)
    }

    pub fn base_url(&self) -> &Url {
        self.transaction.base_url()
    }

    /// Extract structured data from a page.
    ///
    /// # Arguments
    /// * `url` - Page to extract from
    /// * `fields` - Field name -> description of what to put in it
    ///
    /// Success bodies carry the extracted mapping under `scrape`.
    pub async fn scrape(
        &self,
        url: &str,
        fields: ScrapeFields,
    ) -> Result<JsonObject, ExtractError> {
        self.execute(&ScrapeRequest::new(url, fields)).await
    }

    /// Find the links on a page matching a description. Results are under `links`.
    pub async fn links(&self, url: &str, description: &str) -> Result<JsonObject, ExtractError> {
        self.execute(&LinksRequest::new(url, description)).await
    }

    /// Find the "next page" links of a paginated page. Results are under `next`.
    pub async fn next(&self, url: &str) -> Result<JsonObject, ExtractError> {
        self.execute(&NextRequest::new(url)).await
    }

    /// Extract result URLs from a Google search. Results are under `search`.
    ///
    /// `google_domain` defaults to `www.google.com` and `page` to 1.
    pub async fn search(
        &self,
        query: &str,
        google_domain: Option<&str>,
        page: Option<u32>,
    ) -> Result<JsonObject, ExtractError> {
        let mut request = SearchRequest::new(query);
        if let Some(domain) = google_domain {
            request = request.with_google_domain(domain);
        }
        if let Some(page) = page {
            request = request.with_page(page);
        }
        self.execute(&request).await
    }

    /// Send a prepared request, e.g. a [`SearchRequest`] built with its fluent API.
    pub async fn execute<O: Operation>(&self, request: &O) -> Result<JsonObject, ExtractError> {
        self.transaction.execute(&self.api_key, request).await
    }
}
