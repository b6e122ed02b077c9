use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

static RE_NOT_BLANK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S").unwrap());
/// Dotted domain ending in a TLD of two or more letters.
static RE_EMAIL_DOMAIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@[^@\s.]+(\.[^@\s.]+)*\.[A-Za-z]{2,}$").unwrap());

/// Field name -> first violated rule. Empty means the submission may be sent.
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
pub struct ContactSubmission {
    #[validate(regex(path = *RE_NOT_BLANK, message = "Name is required"))]
    pub name: String,
    #[validate(
        email(message = "Invalid email address"),
        regex(path = *RE_EMAIL_DOMAIN, message = "Invalid email address")
    )]
    pub email: String,
    #[validate(regex(path = *RE_NOT_BLANK, message = "Subject is required"))]
    pub subject: String,
    #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
    pub message: String,
}

pub fn validate_submission(submission: &ContactSubmission) -> FieldErrors {
    let Err(errors) = submission.validate() else {
        return FieldErrors::new();
    };

    errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let message = errors
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid {}", field));
            (field.to_string(), message)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactAckData {
    pub name: String,
    pub email: String,
    pub subject: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactAck {
    pub message: String,
    pub data: ContactAckData,
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}
