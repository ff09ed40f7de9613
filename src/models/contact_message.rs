//! Contact message model representing one inbound contact-form submission.

use crate::domain::{EmailAddress, PhoneNumber, ValidationError};
use serde::Serialize;
use serde_json::{Map, Value};

/// A validated contact-form submission.
///
/// A `ContactMessage` is immutable once constructed: the only way to obtain
/// one is [`ContactMessage::from_payload`], which validates the whole field
/// set up front. Required fields are `name`, `message`, and at least one
/// contact method (`email` or `phone`); `subject` is optional. Unknown
/// payload fields are ignored.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContactMessage {
    name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<EmailAddress>,

    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<PhoneNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    subject: Option<String>,

    message: String,
}

impl ContactMessage {
    /// Validate an untyped JSON payload into a `ContactMessage`.
    ///
    /// This is a pure function: it never touches the store and has no side
    /// effects. Leading/trailing whitespace on text fields is trimmed before
    /// the emptiness check.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] describing the first rule the payload
    /// violates. A payload that fails here must never reach persistence.
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let object = payload.as_object().ok_or(ValidationError::NotAnObject)?;

        let name = required_text(object, "name")?;
        let message = required_text(object, "message")?;

        let email = match optional_text(object, "email")? {
            Some(raw) => Some(EmailAddress::new(raw)?),
            None => None,
        };
        let phone = match optional_text(object, "phone")? {
            Some(raw) => Some(PhoneNumber::new(raw)?),
            None => None,
        };
        let subject = optional_text(object, "subject")?;

        if email.is_none() && phone.is_none() {
            return Err(ValidationError::MissingContactMethod);
        }

        Ok(Self {
            name,
            email,
            phone,
            subject,
            message,
        })
    }

    /// Sender name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact email address, if supplied.
    pub fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }

    /// Contact phone number, if supplied.
    pub fn phone(&self) -> Option<&PhoneNumber> {
        self.phone.as_ref()
    }

    /// Optional subject line.
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// Message body.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Extract a required non-empty string field.
fn required_text(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<String, ValidationError> {
    match object.get(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingField(field)),
        Some(value) => {
            let text = value.as_str().ok_or(ValidationError::InvalidType {
                field,
                expected: "string",
            })?;
            let text = text.trim();
            if text.is_empty() {
                return Err(ValidationError::EmptyField(field));
            }
            Ok(text.to_string())
        }
    }
}

/// Extract an optional string field; blank values count as absent.
fn optional_text(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, ValidationError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => {
            let text = value.as_str().ok_or(ValidationError::InvalidType {
                field,
                expected: "string",
            })?;
            let text = text.trim();
            if text.is_empty() {
                Ok(None)
            } else {
                Ok(Some(text.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_minimal_email_payload() {
        let payload = json!({"name": "Jan", "email": "jan@example.com", "message": "Hoi"});
        let msg = ContactMessage::from_payload(&payload).unwrap();

        assert_eq!(msg.name(), "Jan");
        assert_eq!(msg.email().unwrap().as_str(), "jan@example.com");
        assert_eq!(msg.phone(), None);
        assert_eq!(msg.subject(), None);
        assert_eq!(msg.message(), "Hoi");
    }

    #[test]
    fn test_parse_phone_only_payload() {
        let payload = json!({"name": "Jan", "phone": "+32 472 12 34 56", "message": "Bel mij"});
        let msg = ContactMessage::from_payload(&payload).unwrap();
        assert_eq!(msg.phone().unwrap().as_str(), "+32 472 12 34 56");
        assert_eq!(msg.email(), None);
    }

    #[test]
    fn test_missing_name_rejected() {
        let payload = json!({"email": "jan@example.com", "message": "Hoi"});
        let err = ContactMessage::from_payload(&payload).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("name"));
    }

    #[test]
    fn test_missing_message_rejected() {
        let payload = json!({"name": "Jan", "email": "jan@example.com"});
        let err = ContactMessage::from_payload(&payload).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("message"));
    }

    #[test]
    fn test_null_field_counts_as_missing() {
        let payload = json!({"name": null, "email": "jan@example.com", "message": "Hoi"});
        let err = ContactMessage::from_payload(&payload).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("name"));
    }

    #[test]
    fn test_blank_name_rejected() {
        let payload = json!({"name": "   ", "email": "jan@example.com", "message": "Hoi"});
        let err = ContactMessage::from_payload(&payload).unwrap_err();
        assert_eq!(err, ValidationError::EmptyField("name"));
    }

    #[test]
    fn test_wrong_type_rejected() {
        let payload = json!({"name": 42, "email": "jan@example.com", "message": "Hoi"});
        let err = ContactMessage::from_payload(&payload).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidType {
                field: "name",
                expected: "string"
            }
        );
    }

    #[test]
    fn test_invalid_email_rejected() {
        let payload = json!({"name": "Jan", "email": "not-an-email", "message": "Hoi"});
        let err = ContactMessage::from_payload(&payload).unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail("not-an-email".to_string()));
    }

    #[test]
    fn test_contact_method_required() {
        let payload = json!({"name": "Jan", "message": "Hoi"});
        let err = ContactMessage::from_payload(&payload).unwrap_err();
        assert_eq!(err, ValidationError::MissingContactMethod);

        // A blank email does not count as a contact method
        let payload = json!({"name": "Jan", "email": "  ", "message": "Hoi"});
        let err = ContactMessage::from_payload(&payload).unwrap_err();
        assert_eq!(err, ValidationError::MissingContactMethod);
    }

    #[test]
    fn test_non_object_payload_rejected() {
        let err = ContactMessage::from_payload(&json!(["not", "an", "object"])).unwrap_err();
        assert_eq!(err, ValidationError::NotAnObject);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let payload = json!({
            "name": "Jan",
            "email": "jan@example.com",
            "message": "Hoi",
            "honeypot": "ignore me"
        });
        assert!(ContactMessage::from_payload(&payload).is_ok());
    }

    #[test]
    fn test_serialization_omits_absent_fields() {
        let payload = json!({"name": "Jan", "email": "jan@example.com", "message": "Hoi"});
        let msg = ContactMessage::from_payload(&payload).unwrap();
        let value = serde_json::to_value(&msg).unwrap();

        assert_eq!(
            value,
            json!({"name": "Jan", "email": "jan@example.com", "message": "Hoi"})
        );
    }
}
