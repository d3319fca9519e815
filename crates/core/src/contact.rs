//! Contact-form submission types and validation.
//!
//! [`validate`] turns an untrusted [`RawContact`] (straight out of the HTTP
//! request body) into a [`Contact`] or a per-field [`ValidationErrors`] map.
//! Validation is a pure function: every field is checked independently, all
//! violations are collected in one pass, and the first violation per field
//! wins.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum length of the sender name (characters).
pub const MAX_NAME_LENGTH: usize = 120;
/// Maximum length of the message body (characters).
pub const MAX_MESSAGE_LENGTH: usize = 5_000;
/// Maximum length of the subject line (characters).
pub const MAX_SUBJECT_LENGTH: usize = 200;

/// Subject used when the submitter leaves the subject field empty.
pub const DEFAULT_SUBJECT: &str = "Portfolio Contact";

/// Syntactic email shape check: `local@domain.tld`.
///
/// Intentionally a simple pattern, not an RFC 5322 parser — there is no
/// deliverability verification anywhere in this system.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$").expect("valid regex")
});

/// Returns whether `email` matches the `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Raw, untrusted contact-form input.
///
/// Missing keys deserialize as `Null` and are treated as empty strings.
/// Non-string JSON values (numbers, arrays, ...) are rejected per field
/// rather than silently stringified.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawContact {
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub email: Value,
    #[serde(default)]
    pub message: Value,
    #[serde(default)]
    pub subject: Value,
}

/// A validated contact submission.
///
/// All four fields are populated, trimmed, and within bounds; `subject`
/// defaults to [`DEFAULT_SUBJECT`] when the submitter left it empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub message: String,
    pub subject: String,
}

/// Per-field validation errors: field name → first violation message.
///
/// Backed by a `BTreeMap` so the JSON rendering has a stable field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(pub BTreeMap<&'static str, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a raw submission.
///
/// Returns the clean [`Contact`] (with the subject defaulted) or the full
/// error map — never a partial result.
pub fn validate(raw: &RawContact) -> Result<Contact, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = text_field(&raw.name, "name", &mut errors);
    let email = text_field(&raw.email, "email", &mut errors);
    let message = text_field(&raw.message, "message", &mut errors);
    let subject = text_field(&raw.subject, "subject", &mut errors);

    if let Some(name) = &name {
        if name.is_empty() {
            errors.insert("name", "Name is required.");
        } else if name.chars().count() > MAX_NAME_LENGTH {
            errors.insert("name", "Name must be under 120 characters.");
        }
    }

    if let Some(email) = &email {
        if email.is_empty() {
            errors.insert("email", "Email is required.");
        } else if !is_valid_email(email) {
            errors.insert("email", "Invalid email address.");
        }
    }

    if let Some(message) = &message {
        if message.is_empty() {
            errors.insert("message", "Message is required.");
        } else if message.chars().count() > MAX_MESSAGE_LENGTH {
            errors.insert("message", "Message must be under 5,000 characters.");
        }
    }

    // Length is checked against the trimmed raw value, before the default
    // subject is substituted.
    if let Some(subject) = &subject {
        if subject.chars().count() > MAX_SUBJECT_LENGTH {
            errors.insert("subject", "Subject must be under 200 characters.");
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // All four text_field calls succeeded if no errors were recorded.
    let subject = subject.unwrap_or_default();
    Ok(Contact {
        name: name.unwrap_or_default(),
        email: email.unwrap_or_default(),
        message: message.unwrap_or_default(),
        subject: if subject.is_empty() {
            DEFAULT_SUBJECT.to_string()
        } else {
            subject
        },
    })
}

/// Coerce a raw JSON value to trimmed text.
///
/// `Null` (covering absent keys) coerces to the empty string. Any other
/// non-string value records a per-field error and yields `None`, which
/// suppresses the remaining checks for that field.
fn text_field(
    value: &Value,
    field: &'static str,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::String(s) => Some(s.trim().to_string()),
        _ => {
            errors.insert(field, format!("{} must be text.", capitalize(field)));
            None
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
