use crate::Operation;

use serde::Serialize;

/// Payload for `POST /api/next/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextRequest {
    pub url: String,
}

impl NextRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Operation for NextRequest {
    const ENDPOINT: &'static str = "/api/next/";
    const NAME: &'static str = "next";
}
