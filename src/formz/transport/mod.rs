//! # Transport Layer
//!
//! The [`Transport`] trait is the request/response boundary between the
//! form machinery and the asset-tracker HTTP API. The submission pipeline
//! treats it as opaque: one request out, one response or error back, no
//! retries, no cancellation.
//!
//! ## Implementations
//!
//! - [`http::HttpTransport`]: production client over `ureq`
//!   - Synchronous, matching the single-threaded event model
//!   - `CredentialMode::Include` keeps the session cookie jar
//!
//! - [`memory::InMemoryTransport`]: scripted responses for testing
//!   - Records every request so tests can assert call counts and payloads
//!
//! Abstracting the boundary keeps the pipeline testable without a server
//! and leaves room for other backends without touching form logic.

use serde_json::{Map, Value};

use crate::error::Result;

pub mod http;
pub mod memory;

/// HTTP method for a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Whether the request rides with session credentials.
///
/// `Include` is the moral equivalent of the browser client's
/// `credentials: 'include'`: the transport attaches and stores cookies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialMode {
    Include,
    Omit,
}

/// One outgoing submission.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// Path relative to the transport's base URL, e.g. "/signup"
    pub endpoint: String,
    pub method: Method,
    pub payload: Map<String, Value>,
    pub credential_mode: CredentialMode,
}

/// Successful response from the API.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Value,
}

/// Abstract request/response boundary.
///
/// Implementations must perform at most one attempt per call and surface
/// failures as errors; they must not mutate form state.
pub trait Transport {
    fn send(&mut self, request: &TransportRequest) -> Result<TransportResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_strings() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Post.as_str(), "POST");
        assert_eq!(Method::Put.as_str(), "PUT");
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }
}
