//! OAuth Client
//!
//! High-level GitHub OAuth client combining the login redirect, code exchange
//! and profile lookup.

use std::sync::Arc;

use crate::core::{HttpTransport, ReqwestHttpTransport, DEFAULT_MAX_RESPONSE_SIZE};
use crate::error::OAuthResult;
use crate::flows::{
    AuthorizationCodeFlow, AuthorizationCodeFlowImpl, UserProfileFlow, UserProfileFlowImpl,
};
use crate::types::{AccessToken, ClientConfig, LoginUrlParams, TokenExchangeResponse, UserProfile};

/// GitHub OAuth App client.
///
/// Holds only immutable configuration, so one instance can be shared across
/// tasks serving concurrent logins.
pub struct OAuthClient<T: HttpTransport = ReqwestHttpTransport> {
    config: Arc<ClientConfig>,
    authorization: AuthorizationCodeFlowImpl<T>,
    user_profile: UserProfileFlowImpl<T>,
}

impl OAuthClient<ReqwestHttpTransport> {
    /// Create a github.com client with the default transport.
    ///
    /// Performs no network calls and no validation of the credentials.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> OAuthResult<Self> {
        Self::from_config(ClientConfig::new(client_id, client_secret, redirect_uri))
    }

    /// Create a client from a full configuration with the default transport.
    pub fn from_config(config: ClientConfig) -> OAuthResult<Self> {
        let transport = ReqwestHttpTransport::with_options(config.timeout, DEFAULT_MAX_RESPONSE_SIZE)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: HttpTransport> OAuthClient<T> {
    /// Create a client with a custom transport.
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        let config = Arc::new(config);
        let transport = Arc::new(transport);
        Self {
            authorization: AuthorizationCodeFlowImpl::new(config.clone(), transport.clone()),
            user_profile: UserProfileFlowImpl::new(config.clone(), transport),
            config,
        }
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the authorization URL to redirect the user to.
    ///
    /// `state` is passed through untouched; the caller must remember it and
    /// compare it on callback.
    pub fn build_login_url<I, S>(&self, state: &str, allow_signup: bool, scopes: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.build_login_url_with(&LoginUrlParams::new(state, allow_signup).scopes(scopes))
    }

    /// Build the authorization URL from full parameters.
    pub fn build_login_url_with(&self, params: &LoginUrlParams) -> String {
        self.authorization.build_login_url(params)
    }

    /// Exchange an authorization code and return the whole token response.
    pub async fn exchange_code(&self, code: &str, state: &str) -> OAuthResult<TokenExchangeResponse> {
        self.authorization.exchange_code(code, state).await
    }

    /// Exchange an authorization code for an access token.
    ///
    /// When GitHub refuses the code the token is empty and no error is
    /// returned; check [`AccessToken::is_empty`] or call
    /// [`AccessToken::ensure_present`].
    pub async fn exchange_code_for_token(&self, code: &str, state: &str) -> OAuthResult<AccessToken> {
        self.authorization.exchange_code_for_token(code, state).await
    }

    /// Fetch the authenticated user's profile.
    pub async fn fetch_user_profile(&self, token: &AccessToken) -> OAuthResult<UserProfile> {
        self.user_profile.fetch_user_profile(token).await
    }
}

/// Create a github.com client with the default transport.
pub fn oauth_client(
    client_id: impl Into<String>,
    client_secret: impl Into<String>,
    redirect_uri: impl Into<String>,
) -> OAuthResult<OAuthClient> {
    OAuthClient::new(client_id, client_secret, redirect_uri)
}
