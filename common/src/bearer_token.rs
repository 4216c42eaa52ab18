//! The credential sent as `Authorization: Bearer <token>`.

use std::fmt;

use zeroize::Zeroize;

/// Bearer credential for the extraction service.
///
/// Formatting never prints the token, and the buffer is wiped when the last
/// owner drops it. Read it with [`BearerToken::expose`] only when building a
/// request.
#[derive(Clone)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for the `Authorization` header and nothing else.
    #[inline]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Length in bytes; safe to log.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken([REDACTED])")
    }
}

impl fmt::Display for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED BEARER TOKEN]")
    }
}

impl Drop for BearerToken {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}
