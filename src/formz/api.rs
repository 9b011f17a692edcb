//! # API Facade
//!
//! One [`FormApi`] value per mounted form. The facade wires the pieces
//! together — controller, transport, notifier, submit target — and
//! dispatches to them; the logic itself lives in [`crate::form`] and
//! [`crate::submit`].
//!
//! Generic over [`Transport`] and [`Notifier`] so the same facade serves
//! the HTTP client in production and scripted doubles in tests.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::Result;
use crate::form::FormController;
use crate::registry::FieldRegistry;
use crate::submit::{self, Notifier, SubmitOutcome, SubmitTarget};
use crate::transport::Transport;

pub struct FormApi<T: Transport, N: Notifier> {
    controller: FormController,
    transport: T,
    notifier: N,
    target: SubmitTarget,
}

impl<T: Transport, N: Notifier> FormApi<T, N> {
    pub fn new(template: FieldRegistry, target: SubmitTarget, transport: T, notifier: N) -> Self {
        Self {
            controller: FormController::new(template),
            transport,
            notifier,
            target,
        }
    }

    /// Apply one input-change event to the named field.
    pub fn handle_input(&mut self, name: &str, value: &str) -> Result<()> {
        self.controller.handle_input(name, value)
    }

    /// Current immutable registry snapshot, for rendering.
    pub fn snapshot(&self) -> Arc<FieldRegistry> {
        self.controller.snapshot()
    }

    /// Whether the submit control should be disabled.
    pub fn is_invalid(&self) -> bool {
        self.controller.is_invalid()
    }

    /// Submit the form, merging `context` over the field payload.
    pub fn submit(&mut self, context: &Map<String, Value>) -> SubmitOutcome {
        submit::submit(
            &mut self.controller,
            &mut self.transport,
            &mut self.notifier,
            &self.target,
            context,
        )
    }

    /// Discard all input, restoring the template.
    pub fn reset(&mut self) {
        self.controller.reset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submit::NoticeVariant;
    use crate::templates;
    use crate::transport::memory::InMemoryTransport;

    #[derive(Default)]
    struct NullNotifier;

    impl Notifier for NullNotifier {
        fn notify(&mut self, _message: &str, _variant: NoticeVariant) {}
    }

    fn api() -> FormApi<InMemoryTransport, NullNotifier> {
        FormApi::new(
            templates::login(),
            SubmitTarget::post("/signin")
                .on_success("Signed in.")
                .on_error("Sign-in failed."),
            InMemoryTransport::new(),
            NullNotifier,
        )
    }

    #[test]
    fn dispatches_input_to_the_controller() {
        let mut api = api();
        api.handle_input("email", "bob@x.com").unwrap();
        assert_eq!(api.snapshot().get("email").unwrap().value, "bob@x.com");
    }

    #[test]
    fn gates_submission_on_validity() {
        let mut api = api();
        assert!(api.is_invalid());
        let outcome = api.submit(&Map::new());
        assert!(matches!(outcome, SubmitOutcome::Rejected));

        api.handle_input("email", "bob@x.com").unwrap();
        api.handle_input("password", "hunter2!").unwrap();
        assert!(!api.is_invalid());
        let outcome = api.submit(&Map::new());
        assert!(outcome.is_completed());
    }

    #[test]
    fn reset_clears_entered_values() {
        let mut api = api();
        api.handle_input("email", "bob@x.com").unwrap();
        api.reset();
        assert_eq!(api.snapshot().get("email").unwrap().value, "");
    }
}
