//! Core data types for describing one input field.
//!
//! A [`FieldDescriptor`] is both schema and state: the static part (name,
//! label, validators, hints) comes from a form template, the mutable part
//! (`value`, `error_msg`) is updated by the form controller as the user
//! types. The engine only ever interprets the fixed core; presentation
//! hints are carried through untouched for whatever renderer is attached.

use std::fmt;
use std::sync::Arc;

/// A single validation rule: a pure predicate plus the message shown when
/// the predicate flags the value.
///
/// The predicate returns `true` when the value is *invalid* by this rule.
/// Predicates must be total functions over strings: no I/O, no panics.
#[derive(Clone)]
pub struct Validator {
    message: String,
    check: Arc<dyn Fn(&str) -> bool + Send + Sync>,
}

impl Validator {
    pub fn new<F>(message: impl Into<String>, check: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            message: message.into(),
            check: Arc::new(check),
        }
    }

    /// The message rendered next to the field when this rule fires.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// True when `value` violates this rule.
    pub fn rejects(&self, value: &str) -> bool {
        (self.check)(value)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Presentation hints passed through to the renderer.
///
/// Opaque to the validation engine and the form controller. Renderers are
/// free to ignore any of these.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldHints {
    /// Input kind, e.g. "text", "password", "date"
    pub kind: Option<String>,
    pub variant: Option<String>,
    pub size: Option<String>,
    pub multiline: bool,
    pub rows: Option<u8>,
    pub icon: Option<String>,
    pub autocomplete: Option<String>,
}

/// Schema and current state for one input field.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// Unique identifier; doubles as the registry key and the payload key
    pub name: String,
    pub label: String,
    pub placeholder: String,
    /// Current input value
    pub value: String,
    pub required: bool,
    /// Current validation message; empty string means the value is valid
    pub error_msg: String,
    /// Ordered rules; on conflict the first failing rule's message wins
    pub validators: Vec<Validator>,
    pub hints: FieldHints,
}

impl FieldDescriptor {
    /// Create a field with empty value and no rules.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: String::new(),
            placeholder: String::new(),
            value: String::new(),
            required: false,
            error_msg: String::new(),
            validators: Vec::new(),
            hints: FieldHints::default(),
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn hints(mut self, hints: FieldHints) -> Self {
        self.hints = hints;
        self
    }

    /// True when the trimmed value is empty.
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// True when the field currently carries a validation message.
    pub fn has_error(&self) -> bool {
        !self.error_msg.is_empty()
    }
}
