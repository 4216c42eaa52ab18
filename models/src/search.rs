use crate::Operation;

use serde::Serialize;

pub const DEFAULT_GOOGLE_DOMAIN: &str = "www.google.com";
pub const DEFAULT_SEARCH_PAGE: u32 = 1;

/// Payload for `POST /api/search/`.
///
/// Built with a fluent API; anything not overridden keeps the service defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub google_domain: String,
    pub page: u32,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            google_domain: DEFAULT_GOOGLE_DOMAIN.to_string(),
            page: DEFAULT_SEARCH_PAGE,
        }
    }

    pub fn with_google_domain(mut self, domain: impl Into<String>) -> Self {
        self.google_domain = domain.into();
        self
    }

    /// Result page to read. Not range-checked locally; the service rejects bad values.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}

impl Operation for SearchRequest {
    const ENDPOINT: &'static str = "/api/search/";
    const NAME: &'static str = "search";
}
