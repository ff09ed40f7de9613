//! Domain validation errors.

use std::fmt;

/// Errors that can occur while validating an inbound contact submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is absent (or null).
    MissingField(&'static str),

    /// A field is present but has the wrong JSON type.
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    /// A required field is present but blank.
    EmptyField(&'static str),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// Neither an email address nor a phone number was supplied.
    MissingContactMethod,

    /// The payload is not a JSON object.
    NotAnObject,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "missing required field: {}", field),
            Self::InvalidType { field, expected } => {
                write!(f, "field {} must be a {}", field, expected)
            }
            Self::EmptyField(field) => write!(f, "field {} cannot be empty", field),
            Self::InvalidEmail(email) => write!(f, "invalid email address: {}", email),
            Self::InvalidPhone(phone) => write!(f, "invalid phone number: {}", phone),
            Self::MissingContactMethod => {
                write!(f, "an email address or phone number is required")
            }
            Self::NotAnObject => write!(f, "payload must be a JSON object"),
        }
    }
}

impl std::error::Error for ValidationError {}
