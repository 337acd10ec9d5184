use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer};
use validator::{ValidationError, ValidationErrors};

use crate::shared::constants::PASSWORD_MIN_LENGTH;

lazy_static! {
    /// Regex for validating username fields
    /// Letters, digits and `@ . + - _` only
    /// - Valid: "john_doe", "user123", "mentor1", "jane.doe@org", "a+b-c"
    /// - Invalid: "user name", "user#1", "", "user/1"
    pub static ref USERNAME_REGEX: Regex = Regex::new(r"^[\w.@+-]+$").unwrap();
}

/// Rejects passwords that are too short or entirely numeric
pub fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < PASSWORD_MIN_LENGTH {
        return Err(
            ValidationError::new("password_too_short").with_message(Cow::Owned(format!(
                "This password is too short. It must contain at least {} characters.",
                PASSWORD_MIN_LENGTH
            ))),
        );
    }
    if password.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new("password_entirely_numeric")
            .with_message(Cow::Borrowed("This password is entirely numeric.")));
    }
    Ok(())
}

/// Deserializes a string with surrounding whitespace removed, so length checks
/// see what will be stored
pub fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(|s| s.trim().to_string())
}

/// `trimmed` for optional fields; pair with `#[serde(default)]`
pub fn trimmed_option<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|s| s.map(|s| s.trim().to_string()))
}

/// Flattens `validator` errors into sorted `"field: message"` strings
pub fn field_errors(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                format!("{}: {}", field, message)
            })
        })
        .collect();
    messages.sort();
    messages
}
