//! Form state controller.
//!
//! Owns the registry snapshots for one mounted form. Every input change
//! produces a *new* snapshot; the previous one is never touched, so a
//! renderer holding the old `Arc` keeps seeing exactly what it rendered.
//! Validation runs per field on change: editing one field never refreshes
//! another field's message, a stale error sticks around until that field is
//! edited again. That trade was made for responsiveness and is relied on by
//! the tests below.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::{FormzError, Result};
use crate::registry::FieldRegistry;
use crate::validation::run_validators;

/// True when the form must not be submitted.
///
/// A form is invalid when any field carries a validation message, or any
/// required field is empty after trimming. Recomputed on every call — the
/// result gates the submit control and must always reflect the snapshot
/// passed in.
pub fn is_form_invalid(registry: &FieldRegistry) -> bool {
    let contains_err = registry.iter().any(|f| f.has_error());
    let required_missing = registry.iter().any(|f| f.required && f.is_blank());
    contains_err || required_missing
}

/// Collect non-empty field values into a flat payload.
///
/// Empty values are dropped entirely rather than sent as empty strings; the
/// server treats an absent key as "not provided". Keys appear in registry
/// display order.
pub fn build_payload(registry: &FieldRegistry) -> Map<String, Value> {
    let mut payload = Map::new();
    for field in registry {
        if !field.value.is_empty() {
            payload.insert(field.name.clone(), Value::String(field.value.clone()));
        }
    }
    payload
}

/// Holds the live snapshot of one form and applies input events to it.
#[derive(Debug, Clone)]
pub struct FormController {
    template: FieldRegistry,
    current: Arc<FieldRegistry>,
    submitting: bool,
}

impl FormController {
    /// Mount a form from a template.
    ///
    /// The template is copied, never shared: two controllers built from the
    /// same template cannot see each other's edits.
    pub fn new(template: FieldRegistry) -> Self {
        let current = Arc::new(template.clone());
        Self {
            template,
            current,
            submitting: false,
        }
    }

    /// The current immutable snapshot.
    pub fn snapshot(&self) -> Arc<FieldRegistry> {
        Arc::clone(&self.current)
    }

    /// Apply an input-change event.
    ///
    /// Sets the field's value, reruns its validators, and swaps in a new
    /// snapshot. Other fields are carried over untouched. An unknown field
    /// name is a wiring bug in the caller and fails loudly with
    /// [`FormzError::UnknownField`].
    pub fn handle_input(&mut self, name: &str, value: &str) -> Result<()> {
        let mut next = (*self.current).clone();
        let field = next
            .get_mut(name)
            .ok_or_else(|| FormzError::UnknownField(name.to_string()))?;

        field.value = value.to_string();
        field.error_msg = run_validators(&field.validators, value);

        self.current = Arc::new(next);
        Ok(())
    }

    /// Whether submission is currently blocked by validation state.
    pub fn is_invalid(&self) -> bool {
        is_form_invalid(&self.current)
    }

    /// Payload for the current snapshot.
    pub fn payload(&self) -> Map<String, Value> {
        build_payload(&self.current)
    }

    /// Discard all values and messages, restoring the template.
    pub fn reset(&mut self) {
        self.current = Arc::new(self.template.clone());
        self.submitting = false;
    }

    /// True while a submit request is in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Enter the submitting state.
    ///
    /// Returns `false` when a submit is already in flight; the caller must
    /// then refuse the attempt instead of queueing a second request.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Leave the submitting state, re-enabling the submit control.
    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldDescriptor;
    use crate::validation::email_format;

    fn email_template() -> FieldRegistry {
        FieldRegistry::new().with_field(
            FieldDescriptor::new("email")
                .label("Email")
                .required()
                .validator(email_format("invalid email")),
        )
    }

    #[test]
    fn handle_input_updates_value_and_message() {
        let mut form = FormController::new(email_template());

        form.handle_input("email", "bob").unwrap();
        let snap = form.snapshot();
        assert_eq!(snap.get("email").unwrap().value, "bob");
        assert_eq!(snap.get("email").unwrap().error_msg, "invalid email");
        assert!(form.is_invalid());

        form.handle_input("email", "bob@x.com").unwrap();
        let snap = form.snapshot();
        assert_eq!(snap.get("email").unwrap().error_msg, "");
        assert!(!form.is_invalid());

        let payload = form.payload();
        assert_eq!(payload.get("email").unwrap(), "bob@x.com");
    }

    #[test]
    fn unknown_field_fails_loudly() {
        let mut form = FormController::new(email_template());
        let err = form.handle_input("nope", "x").unwrap_err();
        assert!(matches!(err, FormzError::UnknownField(name) if name == "nope"));
    }

    #[test]
    fn previous_snapshot_is_never_mutated() {
        let mut form = FormController::new(email_template());
        let before = form.snapshot();

        form.handle_input("email", "bob@x.com").unwrap();
        let after = form.snapshot();

        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(before.get("email").unwrap().value, "");
        assert_eq!(after.get("email").unwrap().value, "bob@x.com");
    }

    #[test]
    fn editing_one_field_leaves_other_messages_alone() {
        let template = FieldRegistry::new()
            .with_field(
                FieldDescriptor::new("email")
                    .required()
                    .validator(email_format("invalid email")),
            )
            .with_field(FieldDescriptor::new("name").required());
        let mut form = FormController::new(template);

        form.handle_input("email", "bad").unwrap();
        form.handle_input("name", "Bob").unwrap();

        // The stale email message survives until email itself is edited.
        let snap = form.snapshot();
        assert_eq!(snap.get("email").unwrap().error_msg, "invalid email");
    }

    #[test]
    fn invalid_quadrants() {
        // error x required-missing, all four combinations
        let template = FieldRegistry::new()
            .with_field(
                FieldDescriptor::new("email")
                    .required()
                    .validator(email_format("invalid email")),
            )
            .with_field(
                FieldDescriptor::new("nickname")
                    .validator(crate::validation::max_len(3, "too long")),
            );
        let mut form = FormController::new(template);

        // no error, required blank
        assert!(form.is_invalid());

        // error on the optional field, required still blank
        form.handle_input("nickname", "toolong").unwrap();
        assert!(form.is_invalid());

        // error present, required filled
        form.handle_input("email", "bob@x.com").unwrap();
        assert!(form.is_invalid());

        // no error, required filled
        form.handle_input("nickname", "ok").unwrap();
        assert!(!form.is_invalid());
    }

    #[test]
    fn whitespace_only_required_value_is_still_missing() {
        let template =
            FieldRegistry::new().with_field(FieldDescriptor::new("name").required());
        let mut form = FormController::new(template);
        form.handle_input("name", "   ").unwrap();
        assert!(form.is_invalid());
    }

    #[test]
    fn payload_drops_empty_values_and_keeps_order() {
        let template = FieldRegistry::new()
            .with_field(FieldDescriptor::new("name").required())
            .with_field(FieldDescriptor::new("description"))
            .with_field(FieldDescriptor::new("location"));
        let mut form = FormController::new(template);

        form.handle_input("location", "garage").unwrap();
        form.handle_input("name", "Drill").unwrap();

        let payload = form.payload();
        let keys: Vec<&str> = payload.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["name", "location"]);
        assert!(!payload.contains_key("description"));
    }

    #[test]
    fn reset_restores_template_and_is_idempotent() {
        let mut form = FormController::new(email_template());
        form.handle_input("email", "bad").unwrap();

        form.reset();
        let once = form.snapshot();
        assert_eq!(once.get("email").unwrap().value, "");
        assert_eq!(once.get("email").unwrap().error_msg, "");

        form.reset();
        let twice = form.snapshot();
        assert_eq!(twice.get("email").unwrap().value, "");
        assert_eq!(twice.get("email").unwrap().error_msg, "");
    }

    #[test]
    fn controllers_from_one_template_do_not_share_state() {
        let template = email_template();
        let mut a = FormController::new(template.clone());
        let b = FormController::new(template);

        a.handle_input("email", "bob@x.com").unwrap();
        assert_eq!(b.snapshot().get("email").unwrap().value, "");
    }

    #[test]
    fn begin_submit_refuses_reentry() {
        let mut form = FormController::new(email_template());
        assert!(form.begin_submit());
        assert!(!form.begin_submit());
        form.finish_submit();
        assert!(form.begin_submit());
    }
}
