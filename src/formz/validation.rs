//! The validation engine and the stock rules used by the built-in forms.
//!
//! Evaluation is a single ordered pass: the first validator whose predicate
//! flags the value decides the message. Rules carry no state and never
//! touch the outside world; anything asynchronous (like the server-side
//! email-uniqueness check) lives behind the transport boundary, not here.

use chrono::NaiveDate;

use crate::model::Validator;

/// Run `validators` against `value` in order.
///
/// Returns the message of the first validator whose predicate returns
/// `true`, or the empty string when every rule passes. Order matters: with
/// two failing rules, the earlier one wins.
pub fn run_validators(validators: &[Validator], value: &str) -> String {
    validators
        .iter()
        .find(|v| v.rejects(value))
        .map(|v| v.message().to_string())
        .unwrap_or_default()
}

/// Flags values that are empty after trimming.
pub fn required(message: impl Into<String>) -> Validator {
    Validator::new(message, |value: &str| value.trim().is_empty())
}

/// Flags values shorter than `min` characters.
pub fn min_len(min: usize, message: impl Into<String>) -> Validator {
    Validator::new(message, move |value: &str| value.chars().count() < min)
}

/// Flags values longer than `max` characters.
pub fn max_len(max: usize, message: impl Into<String>) -> Validator {
    Validator::new(message, move |value: &str| value.chars().count() > max)
}

/// Flags values that do not look like an email address.
///
/// Same shallow shape check the original client performed: one `@` with a
/// dot somewhere after it. Real verification happens server-side.
pub fn email_format(message: impl Into<String>) -> Validator {
    Validator::new(message, |value: &str| {
        if value.is_empty() {
            return false;
        }
        match value.split_once('@') {
            Some((local, domain)) => local.is_empty() || !domain.contains('.'),
            None => true,
        }
    })
}

/// Flags non-empty values that do not parse as a number.
///
/// Empty values pass so the rule composes with optional fields; pair with
/// [`required`] when the field is mandatory.
pub fn numeric(message: impl Into<String>) -> Validator {
    Validator::new(message, |value: &str| {
        !value.is_empty() && value.trim().parse::<f64>().is_err()
    })
}

/// Flags non-empty values that are not a `YYYY-MM-DD` calendar date.
pub fn date_format(message: impl Into<String>) -> Validator {
    Validator::new(message, |value: &str| {
        !value.is_empty() && NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").is_err()
    })
}
