//! OAuth Error Types
//!
//! Every failure returned by the client names the operation it came from and
//! keeps the underlying cause reachable through `source()`.

use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Operation a failure originated from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Authorization code exchange against the token endpoint.
    ExchangeCode,
    /// Authenticated user lookup against the user endpoint.
    FetchUserProfile,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExchangeCode => "exchanging code for token",
            Self::FetchUserProfile => "fetching user profile",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Root error type for the GitHub OAuth client.
#[derive(Error, Debug)]
pub enum OAuthError {
    #[error("{operation}: {source}")]
    Network {
        operation: Operation,
        #[source]
        source: NetworkError,
    },

    #[error("{operation}: {source}")]
    Parse {
        operation: Operation,
        #[source]
        source: ParseError,
    },

    #[error("{operation}: {source}")]
    Api {
        operation: Operation,
        #[source]
        source: ApiError,
    },

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}

impl OAuthError {
    pub(crate) fn network(operation: Operation, source: NetworkError) -> Self {
        Self::Network { operation, source }
    }

    pub(crate) fn parse(operation: Operation, source: impl Into<ParseError>) -> Self {
        Self::Parse {
            operation,
            source: source.into(),
        }
    }

    pub(crate) fn api(operation: Operation, source: ApiError) -> Self {
        Self::Api { operation, source }
    }

    /// Get error code for telemetry.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Network { .. } => "GITHUB_OAUTH_NETWORK",
            Self::Parse { .. } => "GITHUB_OAUTH_PARSE",
            Self::Api { .. } => "GITHUB_OAUTH_API",
            Self::Configuration(_) => "GITHUB_OAUTH_CONFIG",
        }
    }

    /// Operation that failed, if the error came from a provider call.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Self::Network { operation, .. }
            | Self::Parse { operation, .. }
            | Self::Api { operation, .. } => Some(*operation),
            Self::Configuration(_) => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Provider-supplied message, passed through unmodified.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api { source, .. } => Some(&source.message),
            _ => None,
        }
    }
}

/// Network/transport error.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("request timeout after {timeout:?}")]
    Timeout { timeout: Duration },

    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("connection failed: {message}")]
    ConnectionFailed { message: String },

    #[error("failed to read response body: {message}")]
    Body { message: String },

    #[error("response too large: {size} bytes (limit {limit})")]
    BodyTooLarge { size: usize, limit: usize },
}

/// Response body did not match the expected encoding.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid query string: {message}")]
    InvalidQuery { message: String },

    #[error("invalid form body: {0}")]
    Form(#[from] serde_urlencoded::de::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Provider returned a well-formed response carrying an error message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub documentation_url: Option<String>,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            documentation_url: None,
        }
    }

    pub fn with_documentation_url(mut self, url: Option<String>) -> Self {
        self.documentation_url = url;
        self
    }
}

/// Configuration error.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("failed to create HTTP client: {message}")]
    HttpClient { message: String },

    #[error("invalid {name} endpoint URL: {url}")]
    InvalidEndpoint { name: &'static str, url: String },
}

/// Result type for OAuth operations.
pub type OAuthResult<T> = Result<T, OAuthError>;
