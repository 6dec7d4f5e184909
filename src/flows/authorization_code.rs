//! Authorization Code Flow
//!
//! GitHub OAuth App web flow: login redirect and code exchange.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;
use url::form_urlencoded;

use crate::core::{decode_form, HttpMethod, HttpRequest, HttpTransport};
use crate::error::{OAuthError, OAuthResult, Operation};
use crate::types::{AccessToken, ClientConfig, LoginUrlParams, TokenExchangeResponse};

/// Authorization Code Flow interface.
#[async_trait]
pub trait AuthorizationCodeFlow: Send + Sync {
    /// Build the URL to redirect the user's browser to.
    fn build_login_url(&self, params: &LoginUrlParams) -> String;

    /// Exchange an authorization code, returning the full token response.
    async fn exchange_code(&self, code: &str, state: &str) -> OAuthResult<TokenExchangeResponse>;

    /// Exchange an authorization code for an access token.
    ///
    /// A refused exchange yields an empty token rather than an error.
    async fn exchange_code_for_token(&self, code: &str, state: &str) -> OAuthResult<AccessToken>;
}

/// Authorization Code Flow implementation.
pub struct AuthorizationCodeFlowImpl<T: HttpTransport> {
    config: Arc<ClientConfig>,
    transport: Arc<T>,
}

impl<T: HttpTransport> AuthorizationCodeFlowImpl<T> {
    /// Create new Authorization Code Flow.
    pub fn new(config: Arc<ClientConfig>, transport: Arc<T>) -> Self {
        Self { config, transport }
    }

    fn build_token_url(&self, code: &str, state: &str) -> String {
        use secrecy::ExposeSecret;

        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("client_id", &self.config.client_id)
            .append_pair("client_secret", self.config.client_secret.expose_secret())
            .append_pair("code", code)
            .append_pair("redirect_uri", &self.config.redirect_uri)
            .append_pair("state", state)
            .finish();

        with_query(&self.config.endpoints.token_url, &query)
    }

    fn build_token_request_headers(&self) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        // GitHub answers form-encoded as long as no JSON Accept header is sent.
        headers.insert("content-type".to_string(), "application/json".to_string());
        headers.insert("user-agent".to_string(), self.config.user_agent.clone());
        headers
    }
}

#[async_trait]
impl<T: HttpTransport> AuthorizationCodeFlow for AuthorizationCodeFlowImpl<T> {
    fn build_login_url(&self, params: &LoginUrlParams) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query
            .append_pair("client_id", &self.config.client_id)
            .append_pair("redirect_uri", &self.config.redirect_uri)
            .append_pair("scope", &params.scopes.join(" "))
            .append_pair("state", &params.state)
            .append_pair(
                "allow_signup",
                if params.allow_signup { "true" } else { "false" },
            );

        if let Some(login) = &params.login {
            query.append_pair("login", login);
        }
        if let Some(prompt) = &params.prompt {
            query.append_pair("prompt", prompt.as_str());
        }

        with_query(&self.config.endpoints.authorize_url, &query.finish())
    }

    #[instrument(skip_all, fields(endpoint = %self.config.endpoints.token_url))]
    async fn exchange_code(&self, code: &str, state: &str) -> OAuthResult<TokenExchangeResponse> {
        let request = HttpRequest {
            method: HttpMethod::Post,
            url: self.build_token_url(code, state),
            headers: self.build_token_request_headers(),
            body: Some(String::new()),
            timeout: Some(self.config.timeout),
        };

        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| OAuthError::network(Operation::ExchangeCode, e))?;

        tracing::debug!(
            status = response.status,
            content_type = response.content_type().unwrap_or(""),
            "token endpoint responded"
        );

        decode_form(&response.body).map_err(|e| OAuthError::parse(Operation::ExchangeCode, e))
    }

    async fn exchange_code_for_token(&self, code: &str, state: &str) -> OAuthResult<AccessToken> {
        let response = self.exchange_code(code, state).await?;

        if !response.has_access_token() {
            tracing::warn!(
                error = response.error.as_deref().unwrap_or(""),
                error_description = response.error_description.as_deref().unwrap_or(""),
                "token endpoint returned no access token"
            );
        }

        Ok(response.access_token())
    }
}

fn with_query(endpoint: &str, query: &str) -> String {
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    format!("{}{}{}", endpoint, separator, query)
}
