use crate::Operation;

use serde::Serialize;

/// Payload for `POST /api/links/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinksRequest {
    pub url: String,
    /// Which links to return, e.g. "links to individual product pages".
    pub description: String,
}

impl LinksRequest {
    pub fn new(url: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            description: description.into(),
        }
    }
}

impl Operation for LinksRequest {
    const ENDPOINT: &'static str = "/api/links/";
    const NAME: &'static str = "links";
}
