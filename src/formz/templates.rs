//! Built-in form templates, one per screen of the client.
//!
//! Each constructor returns a *fresh* registry so mounted forms never share
//! state. The `TEMPLATES` table is the single source of truth for which
//! forms exist; adding a screen means adding an entry here.

use once_cell::sync::Lazy;

use crate::model::{FieldDescriptor, FieldHints};
use crate::registry::FieldRegistry;
use crate::validation::{date_format, email_format, max_len, min_len, numeric, required};

fn password_hints() -> FieldHints {
    FieldHints {
        kind: Some("password".to_string()),
        autocomplete: Some("current-password".to_string()),
        ..Default::default()
    }
}

fn email_field() -> FieldDescriptor {
    FieldDescriptor::new("email")
        .label("Email address")
        .placeholder("you@example.com")
        .required()
        .validator(required("Email is required"))
        .validator(email_format("Email address is invalid"))
        .hints(FieldHints {
            kind: Some("email".to_string()),
            autocomplete: Some("email".to_string()),
            ..Default::default()
        })
}

fn password_field() -> FieldDescriptor {
    FieldDescriptor::new("password")
        .label("Password")
        .placeholder("Password")
        .required()
        .validator(required("Password is required"))
        .validator(min_len(8, "Password must be at least 8 characters"))
        .validator(max_len(72, "Password is too long"))
        .hints(password_hints())
}

/// New-account form: username, email, password, birthday.
pub fn signup() -> FieldRegistry {
    FieldRegistry::new()
        .with_field(
            FieldDescriptor::new("username")
                .label("Username")
                .placeholder("Your username")
                .required()
                .validator(required("Username is required"))
                .validator(max_len(50, "Username is too long")),
        )
        .with_field(email_field())
        .with_field(password_field())
        .with_field(
            FieldDescriptor::new("birthday")
                .label("Birthday")
                .placeholder("YYYY-MM-DD")
                .validator(date_format("Birthday must be a valid date"))
                .hints(FieldHints {
                    kind: Some("date".to_string()),
                    ..Default::default()
                }),
        )
}

/// Sign-in form: email and password.
pub fn login() -> FieldRegistry {
    FieldRegistry::new()
        .with_field(email_field())
        .with_field(
            FieldDescriptor::new("password")
                .label("Password")
                .placeholder("Password")
                .required()
                .validator(required("Password is required"))
                .hints(password_hints()),
        )
}

/// Request a password-reset email.
pub fn forgot_password() -> FieldRegistry {
    FieldRegistry::new().with_field(email_field())
}

/// Set a new password for an account.
pub fn reset_password() -> FieldRegistry {
    FieldRegistry::new()
        .with_field(email_field())
        .with_field(password_field())
}

/// New expense report.
pub fn add_expense() -> FieldRegistry {
    FieldRegistry::new()
        .with_field(
            FieldDescriptor::new("item_name")
                .label("Item name")
                .placeholder("What was purchased")
                .required()
                .validator(required("Item name is required"))
                .validator(max_len(100, "Item name is too long")),
        )
        .with_field(
            FieldDescriptor::new("item_cost")
                .label("Cost")
                .placeholder("0.00")
                .required()
                .validator(required("Cost is required"))
                .validator(numeric("Cost must be a number")),
        )
        .with_field(
            FieldDescriptor::new("notes")
                .label("Notes")
                .placeholder("Anything worth remembering")
                .validator(max_len(500, "Notes are too long"))
                .hints(FieldHints {
                    multiline: true,
                    rows: Some(4),
                    ..Default::default()
                }),
        )
        .with_field(
            FieldDescriptor::new("location")
                .label("Purchase location")
                .placeholder("Store or site"),
        )
}

/// New maintenance plan.
pub fn maintenance_plan() -> FieldRegistry {
    FieldRegistry::new()
        .with_field(
            FieldDescriptor::new("name")
                .label("Plan name")
                .placeholder("Short descriptive name")
                .required()
                .validator(required("Plan name is required"))
                .validator(max_len(100, "Plan name is too long")),
        )
        .with_field(
            FieldDescriptor::new("description")
                .label("Description")
                .placeholder("What this plan covers")
                .required()
                .validator(required("Description is required"))
                .validator(max_len(500, "Description is too long"))
                .hints(FieldHints {
                    multiline: true,
                    rows: Some(4),
                    ..Default::default()
                }),
        )
}

/// All built-in templates by name.
pub static TEMPLATES: Lazy<Vec<(&'static str, fn() -> FieldRegistry)>> = Lazy::new(|| {
    vec![
        ("signup", signup as fn() -> FieldRegistry),
        ("login", login),
        ("forgot-password", forgot_password),
        ("reset-password", reset_password),
        ("expense", add_expense),
        ("maintenance-plan", maintenance_plan),
    ]
});

/// Look up a template constructor by name.
pub fn get_template(name: &str) -> Option<FieldRegistry> {
    TEMPLATES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, build)| build())
}
