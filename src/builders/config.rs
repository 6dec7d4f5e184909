//! Configuration Builder
//!
//! Fluent builder for client configuration.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use crate::error::{ConfigurationError, OAuthError};
use crate::types::{ClientConfig, ProviderEndpoints, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};

/// Client configuration builder.
#[derive(Default)]
pub struct ClientConfigBuilder {
    client_id: String,
    client_secret: Option<SecretString>,
    redirect_uri: String,
    endpoints: Option<ProviderEndpoints>,
    authorize_url: Option<String>,
    token_url: Option<String>,
    user_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ClientConfigBuilder {
    /// Create new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set client ID.
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }

    /// Set client secret.
    pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(SecretString::new(client_secret.into()));
        self
    }

    /// Set redirect URI.
    pub fn redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = redirect_uri.into();
        self
    }

    /// Replace all endpoints.
    pub fn endpoints(mut self, endpoints: ProviderEndpoints) -> Self {
        self.endpoints = Some(endpoints);
        self
    }

    /// Use a GitHub Enterprise Server host.
    pub fn enterprise_host(self, host: &str) -> Self {
        self.endpoints(ProviderEndpoints::enterprise(host))
    }

    /// Override authorization endpoint.
    pub fn authorize_url(mut self, url: impl Into<String>) -> Self {
        self.authorize_url = Some(url.into());
        self
    }

    /// Override token endpoint.
    pub fn token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = Some(url.into());
        self
    }

    /// Override user endpoint.
    pub fn user_url(mut self, url: impl Into<String>) -> Self {
        self.user_url = Some(url.into());
        self
    }

    /// Set request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build configuration.
    ///
    /// Credentials are passed through untouched; only endpoint URLs are
    /// checked.
    pub fn build(self) -> Result<ClientConfig, OAuthError> {
        let mut endpoints = self.endpoints.unwrap_or_default();
        if let Some(url) = self.authorize_url {
            endpoints.authorize_url = url;
        }
        if let Some(url) = self.token_url {
            endpoints.token_url = url;
        }
        if let Some(url) = self.user_url {
            endpoints.user_url = url;
        }

        validate_endpoint("authorize", &endpoints.authorize_url)?;
        validate_endpoint("token", &endpoints.token_url)?;
        validate_endpoint("user", &endpoints.user_url)?;

        Ok(ClientConfig {
            client_id: self.client_id,
            client_secret: self
                .client_secret
                .unwrap_or_else(|| SecretString::new(String::new())),
            redirect_uri: self.redirect_uri,
            endpoints,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            user_agent: self
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        })
    }
}

fn validate_endpoint(name: &'static str, url: &str) -> Result<(), ConfigurationError> {
    match Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
        _ => Err(ConfigurationError::InvalidEndpoint {
            name,
            url: url.to_string(),
        }),
    }
}

/// Create a new configuration builder.
pub fn client_config() -> ClientConfigBuilder {
    ClientConfigBuilder::new()
}
