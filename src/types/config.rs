//! Configuration Types
//!
//! GitHub OAuth App client configuration.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header. GitHub rejects API requests without one.
pub const DEFAULT_USER_AGENT: &str = concat!("github-oauth-integration/", env!("CARGO_PKG_VERSION"));

/// github.com authorization endpoint.
pub const GITHUB_AUTHORIZE_URL: &str = "https://github.com/login/oauth/authorize";

/// github.com token endpoint.
pub const GITHUB_TOKEN_URL: &str = "https://github.com/login/oauth/access_token";

/// github.com authenticated user endpoint.
pub const GITHUB_USER_URL: &str = "https://api.github.com/user";

/// OAuth App client configuration.
///
/// Credentials are stored verbatim and never validated; bad values come back
/// as provider errors.
#[derive(Clone)]
pub struct ClientConfig {
    /// OAuth App client identifier.
    pub client_id: String,
    /// OAuth App client secret.
    pub client_secret: SecretString,
    /// Callback URL registered with the OAuth App.
    pub redirect_uri: String,
    /// Provider endpoints.
    pub endpoints: ProviderEndpoints,
    /// Per-request timeout.
    pub timeout: Duration,
    /// User-Agent sent on every request.
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a github.com configuration with default settings.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: SecretString::new(client_secret.into()),
            redirect_uri: redirect_uri.into(),
            endpoints: ProviderEndpoints::github(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Start a configuration builder.
    pub fn builder() -> crate::builders::ClientConfigBuilder {
        crate::builders::ClientConfigBuilder::new()
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("redirect_uri", &self.redirect_uri)
            .field("endpoints", &self.endpoints)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Provider endpoint configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderEndpoints {
    /// Browser-facing authorization endpoint.
    pub authorize_url: String,
    /// Code exchange endpoint.
    pub token_url: String,
    /// Authenticated user endpoint.
    pub user_url: String,
}

impl ProviderEndpoints {
    /// Public github.com endpoints.
    pub fn github() -> Self {
        Self {
            authorize_url: GITHUB_AUTHORIZE_URL.to_string(),
            token_url: GITHUB_TOKEN_URL.to_string(),
            user_url: GITHUB_USER_URL.to_string(),
        }
    }

    /// GitHub Enterprise Server endpoints for `host`.
    ///
    /// Enterprise serves the REST API under `/api/v3` on the same host.
    pub fn enterprise(host: &str) -> Self {
        let host = host.trim_end_matches('/');
        Self {
            authorize_url: format!("https://{}/login/oauth/authorize", host),
            token_url: format!("https://{}/login/oauth/access_token", host),
            user_url: format!("https://{}/api/v3/user", host),
        }
    }
}

impl Default for ProviderEndpoints {
    fn default() -> Self {
        Self::github()
    }
}
