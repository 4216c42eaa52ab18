pub mod config;
pub mod extract;

pub use config::ConfigError;
pub use extract::{ConfigurationFailure, ExtractError};
