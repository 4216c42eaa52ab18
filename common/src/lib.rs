//! Shared building blocks for the web-extract-data workspace.
//!
//! ## Architecture
//!
//! - **common** (this crate): error location tracking, status codes, the bearer token
//! - **models**: request payloads for each remote operation
//! - **web-extract-data**: the client facade and transaction executor
//!
//! Nothing in here performs I/O.

pub mod bearer_token;
pub mod error;
pub mod http_status;


pub use bearer_token::BearerToken;
pub use error::error_location::ErrorLocation;
pub use http_status::HttpStatusCode;
