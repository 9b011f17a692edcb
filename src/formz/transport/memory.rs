use std::collections::VecDeque;

use serde_json::Value;

use crate::error::{FormzError, Result};
use crate::transport::{Transport, TransportRequest, TransportResponse};

/// Scripted transport for tests.
///
/// Every request is recorded in `requests`; responses are served from a
/// queue in FIFO order. With an empty queue, requests succeed with an
/// empty `200`.
#[derive(Default)]
pub struct InMemoryTransport {
    pub requests: Vec<TransportRequest>,
    responses: VecDeque<Result<TransportResponse>>,
}

impl InMemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response.
    pub fn respond_with(&mut self, status: u16, body: Value) {
        self.responses
            .push_back(Ok(TransportResponse { status, body }));
    }

    /// Queue a transport failure.
    pub fn fail_with(&mut self, message: impl Into<String>) {
        self.responses
            .push_back(Err(FormzError::Transport(message.into())));
    }

    /// Number of requests seen so far.
    pub fn call_count(&self) -> usize {
        self.requests.len()
    }
}

impl Transport for InMemoryTransport {
    fn send(&mut self, request: &TransportRequest) -> Result<TransportResponse> {
        self.requests.push(request.clone());
        match self.responses.pop_front() {
            Some(result) => result,
            None => Ok(TransportResponse {
                status: 200,
                body: Value::Null,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{CredentialMode, Method};
    use serde_json::Map;

    fn request() -> TransportRequest {
        TransportRequest {
            endpoint: "/signup".to_string(),
            method: Method::Post,
            payload: Map::new(),
            credential_mode: CredentialMode::Include,
        }
    }

    #[test]
    fn records_requests_in_order() {
        let mut transport = InMemoryTransport::new();
        transport.send(&request()).unwrap();
        transport.send(&request()).unwrap();
        assert_eq!(transport.call_count(), 2);
        assert_eq!(transport.requests[0].endpoint, "/signup");
    }

    #[test]
    fn replays_scripted_responses_fifo() {
        let mut transport = InMemoryTransport::new();
        transport.respond_with(201, Value::String("first".into()));
        transport.fail_with("connection refused");

        let ok = transport.send(&request()).unwrap();
        assert_eq!(ok.status, 201);

        let err = transport.send(&request()).unwrap_err();
        assert!(matches!(err, FormzError::Transport(_)));
    }

    #[test]
    fn defaults_to_empty_success() {
        let mut transport = InMemoryTransport::new();
        let response = transport.send(&request()).unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, Value::Null);
    }
}
