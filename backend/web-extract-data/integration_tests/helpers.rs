//! Test helpers for transaction integration tests.
//!
//! - Starting a mock extraction service
//! - Building clients pointed at it
//! - Finding a local port nothing listens on

use web_extract_data::{ClientConfig, WebExtractClient};

use std::net::TcpListener;

use wiremock::MockServer;

/// Credential used against the mock service.
pub const TEST_API_KEY: &str = "test-key-12345";

/// Expected `Authorization` header for [`TEST_API_KEY`].
pub const TEST_AUTH_HEADER: &str = "Bearer test-key-12345";

/// Test helper: Build a client whose base URL is the mock server.
pub fn client_for(server: &MockServer) -> WebExtractClient {
    let config = ClientConfig::default().with_base_url(server.uri());
    WebExtractClient::with_config(TEST_API_KEY, &config).expect("Failed to build client")
}

/// Test helper: Base URL of a local port with no listener.
///
/// Binds an ephemeral port and releases it, so connecting is refused.
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind ephemeral port");
    let port = listener
        .local_addr()
        .expect("Failed to read local address")
        .port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
