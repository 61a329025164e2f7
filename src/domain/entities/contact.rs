use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::validation::MAX_EMAIL_LENGTH;

const MAX_CONTACT_NAME_LENGTH: u64 = 200;
const MAX_SUBJECT_LENGTH: u64 = 300;

/// Inbound contact form. Missing fields deserialize as blank so they are
/// reported per field by validation instead of as a payload error.
#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct NewContactForm {
    #[validate(length(min = 1, max = MAX_CONTACT_NAME_LENGTH))]
    pub name: String,

    #[validate(email, length(min = 1, max = MAX_EMAIL_LENGTH))]
    pub email: String,

    #[validate(length(min = 1, max = MAX_SUBJECT_LENGTH))]
    pub subject: String,

    #[validate(length(min = 1))]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_are_reported_individually() {
        let form: NewContactForm = serde_json::from_str(r#"{"name": "Ada"}"#).unwrap();
        let errors = form.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(!fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("subject"));
        assert!(fields.contains_key("message"));
    }

    #[test]
    fn rejects_malformed_email() {
        let form = NewContactForm {
            name: "Ada".into(),
            email: "ada-at-example".into(),
            subject: "Hello".into(),
            message: "Hi there".into(),
        };
        assert!(form.validate().unwrap_err().field_errors().contains_key("email"));
    }
}
