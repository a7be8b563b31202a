//! Domain error model.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@.]+$").expect("static email pattern")
});

/// Failure to parse a domain value from text.
///
/// Form-level problems are reported as [`ValidationErrors`] instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A decimal amount could not be parsed.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        Self::InvalidAmount(msg.into())
    }
}

/// A validation message attached to one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// All field-level problems found while validating a form record.
///
/// Forms validate every field before reporting, so callers can show each
/// message next to its input instead of stopping at the first failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[error("{}", render(.errors))]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

fn render(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// First message recorded for `field`, if any.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn has(&self, field: &str) -> bool {
        self.message_for(field).is_some()
    }

    /// `Ok(value)` when nothing was recorded, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

/// Trim a required text field, recording `message` when it ends up empty.
pub fn required(errors: &mut ValidationErrors, field: &str, value: &str, message: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(field, message);
    }
    trimmed.to_string()
}

/// Trim an optional text field; blank input becomes `None`.
pub fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Loose syntactic email check: `local@domain.tld`, no whitespace.
pub fn is_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}
