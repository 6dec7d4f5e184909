//! Core Infrastructure
//!
//! HTTP transport and response body decoding.

pub mod form;
pub mod transport;

pub use form::decode_form;
pub use transport::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, MockHttpTransport,
    ReqwestHttpTransport, DEFAULT_MAX_RESPONSE_SIZE,
};
