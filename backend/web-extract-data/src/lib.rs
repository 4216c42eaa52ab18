//! Typed client for the InstantAPI.ai web extraction service.
//!
//! Four operations (scrape, links, next, search), one transaction executor,
//! one error type. All extraction happens remotely; this crate authenticates,
//! sends the payload and classifies the response.
//!
//! ```no_run
//! # async fn demo() -> Result<(), web_extract_data::ExtractError> {
//! use serde_json::json;
//! use web_extract_data::{ScrapeFields, WebExtractClient};
//!
//! let client = WebExtractClient::new("my-api-key")?;
//! let mut fields = ScrapeFields::new();
//! fields.insert("price".into(), json!("< Numeric price (integer or float). >"));
//! let result = client.scrape("https://example.com/product", fields).await?;
//! println!("{:?}", result.get("scrape"));
//! # Ok(()) }
//! ```

pub mod client;
pub mod config;
pub mod credential;
pub mod error;
pub mod transaction;

#[cfg(test)]
mod tests;

pub use client::WebExtractClient;
pub use config::ClientConfig;
pub use error::{ConfigError, ConfigurationFailure, ExtractError};
pub use transaction::JsonObject;

pub use common::HttpStatusCode;
pub use models::{
    DEFAULT_GOOGLE_DOMAIN, DEFAULT_SEARCH_PAGE, LinksRequest, NextRequest, Operation,
    ScrapeFields, ScrapeRequest, SearchRequest,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DEFAULT_BASE_URL: &str = "https://instantapi.ai";
pub const DEFAULT_USER_AGENT: &str = const_format::concatcp!("web-extract-data/", VERSION);
