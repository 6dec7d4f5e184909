//! Token Types
//!
//! Access token and the token endpoint response.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::error::{ApiError, OAuthError, OAuthResult, Operation};

/// Access token wrapper for safe handling.
///
/// The value is opaque. An empty token means the provider refused the
/// exchange; see [`AccessToken::ensure_present`].
#[derive(Clone)]
pub struct AccessToken {
    value: SecretString,
}

impl AccessToken {
    /// Create new access token.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: SecretString::new(value.into()),
        }
    }

    /// Get token value.
    pub fn secret(&self) -> &str {
        self.value.expose_secret()
    }

    pub fn is_empty(&self) -> bool {
        self.secret().is_empty()
    }

    /// Format as GitHub `Authorization` header value.
    pub fn authorization_header(&self) -> String {
        format!("token {}", self.value.expose_secret())
    }

    /// Reject an empty token with an API error.
    pub fn ensure_present(self) -> OAuthResult<Self> {
        if self.is_empty() {
            return Err(OAuthError::api(
                Operation::ExchangeCode,
                ApiError::new(MISSING_TOKEN_MESSAGE),
            ));
        }
        Ok(self)
    }
}

impl From<String> for AccessToken {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for AccessToken {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &"[REDACTED]")
            .field("empty", &self.is_empty())
            .finish()
    }
}

const MISSING_TOKEN_MESSAGE: &str = "access token missing from token response";

/// Form-encoded response from the token endpoint.
///
/// GitHub answers with `access_token`, `scope` and `token_type` on success
/// and with the `error` triple otherwise, both with HTTP 200.
#[derive(Clone, Default, Deserialize)]
pub struct TokenExchangeResponse {
    #[serde(default)]
    access_token: Option<String>,
    /// Granted scopes, comma separated.
    #[serde(default)]
    pub scope: Option<String>,
    /// Token type (GitHub sends "bearer").
    #[serde(default)]
    pub token_type: Option<String>,
    /// Provider error code, e.g. `bad_verification_code`.
    #[serde(default)]
    pub error: Option<String>,
    /// Human readable error description.
    #[serde(default)]
    pub error_description: Option<String>,
    /// Documentation link for the error.
    #[serde(default)]
    pub error_uri: Option<String>,
}

impl TokenExchangeResponse {
    /// Access token, empty when the provider did not issue one.
    pub fn access_token(&self) -> AccessToken {
        AccessToken::new(self.access_token.clone().unwrap_or_default())
    }

    pub fn has_access_token(&self) -> bool {
        self.access_token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Scopes the user actually granted.
    pub fn granted_scopes(&self) -> Vec<String> {
        self.scope
            .as_deref()
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Convert into a token, failing with the provider's message when absent.
    pub fn into_access_token(self) -> OAuthResult<AccessToken> {
        if self.has_access_token() {
            return Ok(self.access_token());
        }

        let message = self
            .error_description
            .or(self.error)
            .unwrap_or_else(|| MISSING_TOKEN_MESSAGE.to_string());
        Err(OAuthError::api(
            Operation::ExchangeCode,
            ApiError::new(message).with_documentation_url(self.error_uri),
        ))
    }
}

impl std::fmt::Debug for TokenExchangeResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenExchangeResponse")
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .field("scope", &self.scope)
            .field("token_type", &self.token_type)
            .field("error", &self.error)
            .field("error_description", &self.error_description)
            .field("error_uri", &self.error_uri)
            .finish()
    }
}
