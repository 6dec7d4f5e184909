//! GitHub OAuth Integration
//!
//! Client for the GitHub OAuth App web flow:
//!
//! 1. Build the authorization URL and redirect the user's browser to it.
//! 2. Exchange the `code` from the callback for an access token.
//! 3. Fetch the authenticated user's profile with that token.
//!
//! Token storage, refresh, retries and session handling are left to the
//! embedding application.
//!
//! # Example
//!
//! ```rust,no_run
//! use github_oauth_integration::OAuthClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OAuthClient::new(
//!         "my-client-id",
//!         "my-client-secret",
//!         "https://myapp.com/callback",
//!     )?;
//!
//!     // Redirect the browser here; remember the state for the callback.
//!     let url = client.build_login_url("random-state", true, ["read:user", "user:email"]);
//!     println!("Login at: {}", url);
//!
//!     // On callback, after checking `state` matches:
//!     let token = client
//!         .exchange_code_for_token("code-from-callback", "random-state")
//!         .await?
//!         .ensure_present()?;
//!
//!     let profile = client.fetch_user_profile(&token).await?;
//!     println!("Signed in as {}", profile.login);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `types`: configuration, token and profile data structures
//! - `error`: error hierarchy with per-operation context
//! - `core`: HTTP transport and form body decoding
//! - `flows`: authorization code and user profile flows
//! - `builders`: fluent configuration builder
//! - `client`: high-level client combining the flows

pub mod builders;
pub mod client;
pub mod core;
pub mod error;
pub mod flows;
pub mod types;

// Re-export main client
pub use client::{oauth_client, OAuthClient};

// Re-export builders
pub use builders::{client_config, ClientConfigBuilder};

// Re-export errors
pub use error::{
    ApiError, ConfigurationError, NetworkError, OAuthError, OAuthResult, Operation, ParseError,
};

// Re-export types
pub use types::{
    AccessToken, ClientConfig, LoginUrlParams, Prompt, ProviderEndpoints, TokenExchangeResponse,
    UserProfile,
};

// Re-export core components
pub use crate::core::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, MockHttpTransport, ReqwestHttpTransport};

// Re-export flows
pub use flows::{AuthorizationCodeFlow, AuthorizationCodeFlowImpl, UserProfileFlow, UserProfileFlowImpl};
