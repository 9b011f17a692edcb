use serde_json::Value;

use crate::error::{FormzError, Result};
use crate::transport::{CredentialMode, Method, Transport, TransportRequest, TransportResponse};

/// Production transport over `ureq`.
///
/// A single agent carries the cookie jar, so requests sent with
/// [`CredentialMode::Include`] share the session established by sign-in.
/// `Omit` requests bypass the agent entirely.
pub struct HttpTransport {
    base_url: String,
    agent: ureq::Agent,
}

impl HttpTransport {
    /// Create a transport rooted at `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            agent: ureq::AgentBuilder::new().build(),
        }
    }

    fn url_for(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}/{}", self.base_url, endpoint)
        }
    }

    fn build(&self, request: &TransportRequest) -> ureq::Request {
        let url = self.url_for(&request.endpoint);
        let req = match request.credential_mode {
            CredentialMode::Include => self.agent.request(request.method.as_str(), &url),
            CredentialMode::Omit => ureq::request(request.method.as_str(), &url),
        };
        req.set("Accept", "application/json")
    }
}

impl Transport for HttpTransport {
    fn send(&mut self, request: &TransportRequest) -> Result<TransportResponse> {
        let req = self.build(request);

        let result = match request.method {
            // GET and DELETE carry no body
            Method::Get | Method::Delete => req.call(),
            Method::Post | Method::Put => req.send_json(Value::Object(request.payload.clone())),
        };

        let response = match result {
            Ok(response) => response,
            Err(ureq::Error::Status(status, response)) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| String::from("<unreadable body>"));
                return Err(FormzError::TransportStatus { status, message });
            }
            Err(err) => return Err(FormzError::Transport(err.to_string())),
        };

        let status = response.status();
        let text = response.into_string().map_err(FormzError::Io)?;
        // Some endpoints answer with an empty body on success.
        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };

        Ok(TransportResponse { status, body })
    }
}
