use common::ErrorLocation;
use thiserror::Error;

/// Rejected [`ClientConfig`](crate::ClientConfig) values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config Validation Error: {reason} {location}")]
    ValidationError {
        location: ErrorLocation,
        reason: String,
    },
}
