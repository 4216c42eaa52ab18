use crate::Operation;

use serde::Serialize;
use serde_json::{Map, Value};

/// Field name -> natural-language description of what to extract.
///
/// Values are usually strings, but the service also accepts nested
/// objects and arrays describing structured fields.
pub type ScrapeFields = Map<String, Value>;

/// Payload for `POST /api/scrape/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrapeRequest {
    pub url: String,
    pub fields: ScrapeFields,
}

impl ScrapeRequest {
    pub fn new(url: impl Into<String>, fields: ScrapeFields) -> Self {
        Self {
            url: url.into(),
            fields,
        }
    }
}

impl Operation for ScrapeRequest {
    const ENDPOINT: &'static str = "/api/scrape/";
    const NAME: &'static str = "scrape";
}
