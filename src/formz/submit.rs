//! Submission pipeline.
//!
//! One explicit submit action becomes at most one transport request. The
//! pipeline gates on form validity, merges contextual fields the user never
//! edits (owner ids and the like), and translates the outcome into exactly
//! one notification. On failure the snapshot is left untouched so the user
//! can retry without re-entering anything.

use serde_json::{Map, Value};

use crate::error::FormzError;
use crate::form::FormController;
use crate::transport::{CredentialMode, Method, Transport, TransportRequest, TransportResponse};

/// Notification severity, mirrored by the toast UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeVariant {
    Success,
    Error,
}

/// Fire-and-forget notification sink; the caller never reads a result back.
pub trait Notifier {
    fn notify(&mut self, message: &str, variant: NoticeVariant);
}

/// Where and how a form submits, plus the notices shown either way.
#[derive(Debug, Clone)]
pub struct SubmitTarget {
    pub endpoint: String,
    pub method: Method,
    pub credential_mode: CredentialMode,
    pub success_notice: String,
    pub error_notice: String,
}

impl SubmitTarget {
    pub fn post(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method: Method::Post,
            credential_mode: CredentialMode::Include,
            success_notice: String::new(),
            error_notice: String::new(),
        }
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_credential_mode(mut self, mode: CredentialMode) -> Self {
        self.credential_mode = mode;
        self
    }

    pub fn on_success(mut self, notice: impl Into<String>) -> Self {
        self.success_notice = notice.into();
        self
    }

    pub fn on_error(mut self, notice: impl Into<String>) -> Self {
        self.error_notice = notice.into();
        self
    }
}

/// Result of one submit attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Blocked before the transport was touched (invalid form or a submit
    /// already in flight)
    Rejected,
    /// Transport succeeded; the form has been reset
    Completed(TransportResponse),
    /// Transport failed; the form state is preserved for retry
    Failed(FormzError),
}

impl SubmitOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, SubmitOutcome::Completed(_))
    }
}

/// Run one submit attempt end to end.
///
/// `context` entries are merged over the form payload and always win on key
/// collision; they carry identifiers (creator, owning entity) that are not
/// part of the editable registry.
pub fn submit<T: Transport, N: Notifier>(
    controller: &mut FormController,
    transport: &mut T,
    notifier: &mut N,
    target: &SubmitTarget,
    context: &Map<String, Value>,
) -> SubmitOutcome {
    if controller.is_invalid() {
        notifier.notify(&target.error_notice, NoticeVariant::Error);
        return SubmitOutcome::Rejected;
    }

    // A second click while the first request is in flight is refused
    // outright, not queued.
    if !controller.begin_submit() {
        return SubmitOutcome::Rejected;
    }

    let mut payload = controller.payload();
    for (key, value) in context {
        payload.insert(key.clone(), value.clone());
    }

    let request = TransportRequest {
        endpoint: target.endpoint.clone(),
        method: target.method,
        payload,
        credential_mode: target.credential_mode,
    };

    let result = transport.send(&request);
    controller.finish_submit();

    match result {
        Ok(response) => {
            controller.reset();
            notifier.notify(&target.success_notice, NoticeVariant::Success);
            SubmitOutcome::Completed(response)
        }
        Err(err) => {
            notifier.notify(&target.error_notice, NoticeVariant::Error);
            SubmitOutcome::Failed(err)
        }
    }
}
