//! HTTP Transport
//!
//! HTTP client interface and implementations for provider requests.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::error::{ConfigurationError, NetworkError};
use crate::types::DEFAULT_TIMEOUT;

/// Maximum accepted response body size.
pub const DEFAULT_MAX_RESPONSE_SIZE: usize = 1024 * 1024;

/// HTTP request definition.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Request URL, query string included.
    pub url: String,
    /// Request headers.
    pub headers: HashMap<String, String>,
    /// Request body.
    pub body: Option<String>,
    /// Request timeout.
    pub timeout: Option<Duration>,
}

/// HTTP method.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// HTTP response definition.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers, lowercased names.
    pub headers: HashMap<String, String>,
    /// Response body.
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_lowercase(), value.to_string());
        self
    }

    /// Header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(String::as_str)
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }
}

/// HTTP transport interface (for dependency injection).
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send an HTTP request.
    ///
    /// Any status code is a successful round trip; only transport failures
    /// are errors.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, NetworkError>;
}

/// Default reqwest-based HTTP transport.
#[derive(Clone, Debug)]
pub struct ReqwestHttpTransport {
    client: reqwest::Client,
    default_timeout: Duration,
    max_response_size: usize,
}

impl ReqwestHttpTransport {
    /// Create new transport with default settings.
    pub fn new() -> Result<Self, ConfigurationError> {
        Self::with_options(DEFAULT_TIMEOUT, DEFAULT_MAX_RESPONSE_SIZE)
    }

    /// Create transport with custom options.
    pub fn with_options(
        timeout: Duration,
        max_response_size: usize,
    ) -> Result<Self, ConfigurationError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigurationError::HttpClient {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            default_timeout: timeout,
            max_response_size,
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestHttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, NetworkError> {
        let timeout = request.timeout.unwrap_or(self.default_timeout);

        let mut req_builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };

        for (key, value) in &request.headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = request.body {
            req_builder = req_builder.body(body);
        }

        let response = req_builder
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify(e, timeout))?;

        let status = response.status().as_u16();
        tracing::debug!(method = request.method.as_str(), status, "provider responded");

        let mut headers = HashMap::new();
        for (key, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(key.as_str().to_lowercase(), v.to_string());
            }
        }

        if let Some(len) = response.content_length() {
            if exceeds_limit(len, self.max_response_size) {
                return Err(NetworkError::BodyTooLarge {
                    size: usize::try_from(len).unwrap_or(usize::MAX),
                    limit: self.max_response_size,
                });
            }
        }

        let bytes = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                NetworkError::Timeout { timeout }
            } else {
                NetworkError::Body {
                    message: e.to_string(),
                }
            }
        })?;

        if bytes.len() > self.max_response_size {
            return Err(NetworkError::BodyTooLarge {
                size: bytes.len(),
                limit: self.max_response_size,
            });
        }

        Ok(HttpResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}

/// A length that does not fit `usize` is over any limit.
fn exceeds_limit(len: u64, limit: usize) -> bool {
    usize::try_from(len).map_or(true, |len| len > limit)
}

fn classify(error: reqwest::Error, timeout: Duration) -> NetworkError {
    if error.is_timeout() {
        NetworkError::Timeout { timeout }
    } else {
        NetworkError::Transport(error)
    }
}

/// Mock HTTP transport for testing.
///
/// Replies are consumed in the order they were queued.
#[derive(Default)]
pub struct MockHttpTransport {
    replies: Mutex<VecDeque<Result<HttpResponse, NetworkError>>>,
    request_history: Mutex<Vec<HttpRequest>>,
    default_response: Mutex<Option<HttpResponse>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockHttpTransport {
    /// Create new mock transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response to return.
    pub fn queue_response(&self, response: HttpResponse) -> &Self {
        lock(&self.replies).push_back(Ok(response));
        self
    }

    /// Queue a 200 response with a form-encoded body.
    pub fn queue_form_response(&self, body: &str) -> &Self {
        self.queue_response(
            HttpResponse::new(200, body)
                .with_header("content-type", "application/x-www-form-urlencoded"),
        )
    }

    /// Queue a JSON response.
    pub fn queue_json_response(&self, status: u16, body: &serde_json::Value) -> &Self {
        self.queue_response(
            HttpResponse::new(status, body.to_string())
                .with_header("content-type", "application/json"),
        )
    }

    /// Queue a transport failure.
    pub fn queue_error(&self, error: NetworkError) -> &Self {
        lock(&self.replies).push_back(Err(error));
        self
    }

    /// Set default response when queue is empty.
    pub fn set_default_response(&self, response: HttpResponse) -> &Self {
        *lock(&self.default_response) = Some(response);
        self
    }

    /// Get request history.
    pub fn get_requests(&self) -> Vec<HttpRequest> {
        lock(&self.request_history).clone()
    }

    /// Get last request.
    pub fn get_last_request(&self) -> Option<HttpRequest> {
        lock(&self.request_history).last().cloned()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, NetworkError> {
        lock(&self.request_history).push(request);

        if let Some(reply) = lock(&self.replies).pop_front() {
            return reply;
        }

        lock(&self.default_response)
            .clone()
            .ok_or_else(|| NetworkError::ConnectionFailed {
                message: "No mock response available".to_string(),
            })
    }
}
