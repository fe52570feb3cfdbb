use std::borrow::Cow;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};
use validator::{Validate, ValidationError};

use crate::{
    constants::{
        MAX_EMAIL_CHARS, MAX_LINKS_PER_MESSAGE, MAX_MESSAGE_CHARS, MAX_NAME_CHARS,
        MAX_SUBJECT_CHARS,
    },
    errors::ContactRejection,
};

// `local@domain.tld`-shaped, deliberately looser than RFC 5322.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://").expect("link pattern compiles"));

const FIELDS: [&str; 4] = ["name", "email", "subject", "message"];

// ───── Validated Model ───────────────────────────────────────────────

/// A contact form that passed every rule.
///
/// Only [`ContactSubmission::parse`] builds one, so holding a value is proof
/// that the payload was valid as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    name: String,
    email: String,
    subject: String,
    message: String,
    received_at: DateTime<Utc>,
}

impl ContactSubmission {
    /// Parses an untrusted JSON payload.
    pub fn parse(payload: &Value) -> Result<Self, ContactRejection> {
        let object = payload.as_object().ok_or(ContactRejection::NotAnObject)?;

        let [name, email, subject, message] = FIELDS.map(|field| text_field(object, field));

        let form = ContactForm {
            name: name?.trim().to_string(),
            email: email?.trim().to_lowercase(),
            subject: subject?.trim().to_string(),
            message: message?.trim().to_string(),
        };

        form.validate()?;

        Ok(ContactSubmission {
            name: form.name,
            email: form.email,
            subject: form.subject,
            message: form.message,
            received_at: Utc::now(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }
}

/// Falsy JSON values (`null`, `false`, `0`, `""`) count as absent; any other
/// non-string value is the wrong type.
fn text_field<'a>(object: &'a Map<String, Value>, field: &'static str) -> Result<&'a str, ContactRejection> {
    match object.get(field) {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Err(ContactRejection::MissingField(field)),
        Some(Value::String(s)) if s.is_empty() => Err(ContactRejection::MissingField(field)),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Err(ContactRejection::MissingField(field)),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(ContactRejection::NotText(field)),
    }
}

// ───── Input & Validation Requests ──────────────────────────────────

/// Holds the trimmed field values. Every rule, including the length
/// ceilings and the non-empty check, sees the trimmed text.
#[derive(Debug, Validate)]
struct ContactForm {
    #[validate(length(min = 1, max = MAX_NAME_CHARS))]
    name: String,

    #[validate(
        length(min = 1, max = MAX_EMAIL_CHARS),
        regex(path = *EMAIL_PATTERN, message = "Email address is not valid")
    )]
    email: String,

    #[validate(length(min = 1, max = MAX_SUBJECT_CHARS))]
    subject: String,

    #[validate(
        length(min = 1, max = MAX_MESSAGE_CHARS),
        custom(function = "validate_link_count")
    )]
    message: String,
}

// ───── Validation Helpers ───────────────────────────────────────────

pub fn count_links(message: &str) -> usize {
    LINK_PATTERN.find_iter(message).count()
}

pub fn validate_link_count(message: &str) -> Result<(), ValidationError> {
    if count_links(message) > MAX_LINKS_PER_MESSAGE {
        let mut err = ValidationError::new("too_many_links");
        err.message = Some(Cow::Borrowed("Message contains too many links"));
        return Err(err);
    }
    Ok(())
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ContactResponse {
    pub message: String,
}
