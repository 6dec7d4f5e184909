//! User Profile Flow
//!
//! Authenticated user lookup with an access token.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;

use crate::core::{HttpMethod, HttpRequest, HttpTransport};
use crate::error::{ApiError, OAuthError, OAuthResult, Operation};
use crate::types::{AccessToken, ClientConfig, UserProfile};

/// GitHub REST media type.
const GITHUB_JSON: &str = "application/vnd.github+json";

/// User profile lookup interface.
#[async_trait]
pub trait UserProfileFlow: Send + Sync {
    /// Fetch the profile of the user the token belongs to.
    async fn fetch_user_profile(&self, token: &AccessToken) -> OAuthResult<UserProfile>;
}

/// User profile lookup implementation.
pub struct UserProfileFlowImpl<T: HttpTransport> {
    config: Arc<ClientConfig>,
    transport: Arc<T>,
}

impl<T: HttpTransport> UserProfileFlowImpl<T> {
    pub fn new(config: Arc<ClientConfig>, transport: Arc<T>) -> Self {
        Self { config, transport }
    }

    // Header auth only: GitHub no longer accepts the token as a query param.
    fn build_headers(&self, token: &AccessToken) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert("authorization".to_string(), token.authorization_header());
        headers.insert("accept".to_string(), GITHUB_JSON.to_string());
        headers.insert("user-agent".to_string(), self.config.user_agent.clone());
        headers
    }
}

#[async_trait]
impl<T: HttpTransport> UserProfileFlow for UserProfileFlowImpl<T> {
    #[instrument(skip_all, fields(endpoint = %self.config.endpoints.user_url))]
    async fn fetch_user_profile(&self, token: &AccessToken) -> OAuthResult<UserProfile> {
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: self.config.endpoints.user_url.clone(),
            headers: self.build_headers(token),
            body: None,
            timeout: Some(self.config.timeout),
        };

        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| OAuthError::network(Operation::FetchUserProfile, e))?;

        // Status is not consulted: GitHub reports rejection through `message`.
        let profile: UserProfile = serde_json::from_str(&response.body)
            .map_err(|e| OAuthError::parse(Operation::FetchUserProfile, e))?;

        if let Some(message) = profile.error_message() {
            tracing::warn!(
                status = response.status,
                content_type = response.content_type().unwrap_or(""),
                provider_message = message,
                "user endpoint rejected request"
            );
            return Err(OAuthError::api(
                Operation::FetchUserProfile,
                ApiError::new(message).with_documentation_url(profile.documentation_url.clone()),
            ));
        }

        tracing::debug!(login = %profile.login, id = profile.id, "fetched user profile");
        Ok(profile)
    }
}
