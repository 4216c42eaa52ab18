//! Error taxonomy for extraction transactions.
//!
//! - Status codes stored as [`HttpStatusCode`], never parsed back out of strings
//! - Transport faults keep the timeout/connect flags reqwest reports
//! - Every variant carries the [`ErrorLocation`] it was raised from

use crate::error::ConfigError;

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

/// Outcome of a failed transaction or a rejected client construction.
#[derive(Debug, ThisError)]
pub enum ExtractError {
    /// Rejected locally before any request was sent.
    #[error("Configuration Error: {reason} {location}")]
    Configuration {
        reason: ConfigurationFailure,
        location: ErrorLocation,
    },

    /// No response was obtained from the service.
    #[error("Network Error: {message} {location}")]
    Network {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    /// A response arrived but its body was not a JSON object.
    #[error("Protocol Error: HTTP {status_code} - {message} {location}")]
    Protocol {
        status_code: HttpStatusCode,
        message: String,
        body: String,
        location: ErrorLocation,
    },

    /// The service answered with `{"error": true, "reason": ...}`.
    #[error("Application Error: {reason} {location}")]
    Application {
        reason: String,
        status_code: HttpStatusCode,
        location: ErrorLocation,
    },

    /// Non-200 response without an error envelope.
    #[error("HTTP Error: {status_code} - {body} {location}")]
    Http {
        status_code: HttpStatusCode,
        body: String,
        location: ErrorLocation,
    },
}

/// Specific reasons a client could not be configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationFailure {
    EmptyCredential,
    PlaceholderCredential { placeholder: &'static str },
    InvalidCredentialHeader,
    MissingEnvVar { name: &'static str },
    NonUnicodeEnvVar { name: &'static str },
    InvalidBaseUrl { message: String },
    ClientBuild { message: String },
    InvalidConfig { message: String },
}

impl std::fmt::Display for ConfigurationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCredential => write!(f, "API key is empty"),
            Self::PlaceholderCredential { placeholder } => {
                write!(f, "API key still contains the placeholder '{}'", placeholder)
            }
            Self::InvalidCredentialHeader => {
                write!(f, "API key contains characters not allowed in an HTTP header")
            }
            Self::MissingEnvVar { name } => write!(f, "environment variable {} is not set", name),
            Self::NonUnicodeEnvVar { name } => {
                write!(f, "environment variable {} is not valid unicode", name)
            }
            Self::InvalidBaseUrl { message } => write!(f, "invalid base URL: {}", message),
            Self::ClientBuild { message } => write!(f, "HTTP client build failed: {}", message),
            Self::InvalidConfig { message } => write!(f, "{}", message),
        }
    }
}

impl ExtractError {
    #[track_caller]
    pub fn configuration(reason: ConfigurationFailure) -> Self {
        ExtractError::Configuration {
            reason,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn protocol(
        status_code: HttpStatusCode,
        message: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        ExtractError::Protocol {
            status_code,
            message: message.into(),
            body: body.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn application(reason: impl Into<String>, status_code: HttpStatusCode) -> Self {
        ExtractError::Application {
            reason: reason.into(),
            status_code,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn http(status_code: HttpStatusCode, body: impl Into<String>) -> Self {
        ExtractError::Http {
            status_code,
            body: body.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create from a transport error with its timeout/connect flags preserved.
    #[track_caller]
    pub fn from_reqwest(error: &reqwest::Error) -> Self {
        ExtractError::Network {
            message: error.to_string(),
            is_timeout: error.is_timeout(),
            is_connection: error.is_connect(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Hint for callers that run their own retry policy. The client never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            ExtractError::Network {
                is_timeout,
                is_connection,
                ..
            } => *is_timeout || *is_connection,
            ExtractError::Http { status_code, .. } => status_code.is_retryable(),
            ExtractError::Protocol { status_code, .. } => status_code.is_retryable(),
            ExtractError::Configuration { .. } => false,
            ExtractError::Application { .. } => false,
        }
    }

    /// Get error category for metrics.
    pub fn error_category(&self) -> &'static str {
        match self {
            ExtractError::Configuration { .. } => "configuration",
            ExtractError::Network { is_timeout: true, .. } => "timeout",
            ExtractError::Network { is_connection: true, .. } => "connection",
            ExtractError::Network { .. } => "network",
            ExtractError::Protocol { .. } => "protocol",
            ExtractError::Application { .. } => "application",
            ExtractError::Http { status_code, .. } if status_code.is_client_error() => {
                "client_error"
            }
            ExtractError::Http { status_code, .. } if status_code.is_server_error() => {
                "server_error"
            }
            ExtractError::Http { .. } => "http",
        }
    }

    /// Get HTTP status code if a response was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ExtractError::Protocol { status_code, .. }
            | ExtractError::Application { status_code, .. }
            | ExtractError::Http { status_code, .. } => Some(status_code.0),
            ExtractError::Configuration { .. } | ExtractError::Network { .. } => None,
        }
    }

    /// Service-provided reason, for application errors only.
    pub fn reason(&self) -> Option<&str> {
        match self {
            ExtractError::Application { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ExtractError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        ExtractError::from_reqwest(&error)
    }
}

impl From<url::ParseError> for ExtractError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        ExtractError::configuration(ConfigurationFailure::InvalidBaseUrl {
            message: error.to_string(),
        })
    }
}

impl From<ConfigError> for ExtractError {
    #[track_caller]
    fn from(error: ConfigError) -> Self {
        ExtractError::configuration(ConfigurationFailure::InvalidConfig {
            message: error.to_string(),
        })
    }
}
