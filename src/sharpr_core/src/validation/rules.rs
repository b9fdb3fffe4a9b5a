use std::{fmt, sync::LazyLock};

use regex::Regex;
use thiserror::Error;

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("is required")]
    Required,
    #[error("must be at least {min} characters")]
    TooShort { min: usize },
    #[error("is not a valid email address")]
    InvalidFormat,
}

impl FieldError {
    /// Full sentence shown next to `field`, e.g. "Name is required".
    pub fn message_for(&self, field: FormField) -> String {
        format!("{field} {self}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Message => "Message",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Message => "message",
        }
    }

    pub fn validator(&self) -> fn(&str) -> Result<(), FieldError> {
        match self {
            FormField::Name => validate_name,
            FormField::Email => validate_email,
            FormField::Message => validate_message,
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn validate_name(value: &str) -> Result<(), FieldError> {
    require_min_chars(value, NAME_MIN_CHARS)
}

pub fn validate_email(value: &str) -> Result<(), FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required);
    }
    if !EMAIL_PATTERN.is_match(trimmed) {
        return Err(FieldError::InvalidFormat);
    }
    Ok(())
}

pub fn validate_message(value: &str) -> Result<(), FieldError> {
    require_min_chars(value, MESSAGE_MIN_CHARS)
}

fn require_min_chars(value: &str, min: usize) -> Result<(), FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required);
    }
    if trimmed.chars().count() < min {
        return Err(FieldError::TooShort { min });
    }
    Ok(())
}
