//! HTTP status codes carried by classified transaction errors.

/// HTTP status code for error categorization.
///
/// Stored directly from the response rather than parsed out of error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpStatusCode(pub u16);

impl HttpStatusCode {
    /// The only status the extraction service uses for a successful transaction.
    pub const OK: HttpStatusCode = HttpStatusCode(200);

    pub fn is_ok(&self) -> bool {
        *self == Self::OK
    }

    /// 4xx client errors (bad credential, bad payload).
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.0)
    }

    /// 5xx server errors.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.0)
    }

    /// Codes that indicate a transient failure worth retrying on the caller's side.
    pub fn is_retryable(&self) -> bool {
        matches!(self.0, 502 | 503 | 504 | 429)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode(code)
    }
}

impl std::fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
