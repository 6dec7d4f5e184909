//! Integration tests using WireMock
//!
//! These tests run the client against a stub GitHub server and check the
//! requests it sends and the way it reads the responses.

mod login_url;
mod user_profile;

use std::time::Duration;

use github_oauth_integration::{client_config, OAuthClient};
use wiremock::MockServer;

pub const CLIENT_ID: &str = "Iv1.test-client";
pub const CLIENT_SECRET: &str = "test-secret";
pub const REDIRECT_URI: &str = "https://app.example.com/auth/callback";

/// Helper to start a stub provider.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Helper to build a client whose endpoints all point at `server`.
pub fn client_for(server: &MockServer) -> OAuthClient {
    client_with_timeout(server, Duration::from_secs(5))
}

pub fn client_with_timeout(server: &MockServer, timeout: Duration) -> OAuthClient {
    let config = client_config()
        .client_id(CLIENT_ID)
        .client_secret(CLIENT_SECRET)
        .redirect_uri(REDIRECT_URI)
        .authorize_url(format!("{}/login/oauth/authorize", server.uri()))
        .token_url(format!("{}/login/oauth/access_token", server.uri()))
        .user_url(format!("{}/user", server.uri()))
        .timeout(timeout)
        .build()
        .expect("Failed to build config");

    OAuthClient::from_config(config).expect("Failed to build client")
}

/// Helper to build a client whose endpoints refuse connections.
pub fn unreachable_client() -> OAuthClient {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let config = client_config()
        .client_id(CLIENT_ID)
        .client_secret(CLIENT_SECRET)
        .redirect_uri(REDIRECT_URI)
        .token_url(format!("http://{}/login/oauth/access_token", addr))
        .user_url(format!("http://{}/user", addr))
        .build()
        .expect("Failed to build config");

    OAuthClient::from_config(config).expect("Failed to build client")
}
