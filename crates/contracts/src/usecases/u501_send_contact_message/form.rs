use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Valid email is required";
pub const MESSAGE_REQUIRED: &str = "Message is required";

/// Subject sent when the user leaves the field empty.
pub const DEFAULT_SUBJECT: &str = "No Subject";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }
}

/// Raw field values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Field name → message. A missing entry means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<ContactField, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: ContactField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    fn insert(&mut self, field: ContactField, message: &'static str) {
        self.0.insert(field, message);
    }
}

/// Body handed to the email provider's template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern"));

/// Matches `\S+@\S+\.\S+` anywhere in `value`.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = ContactForm::default();
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        if self.name.trim().is_empty() {
            errors.insert(ContactField::Name, NAME_REQUIRED);
        }
        if !is_valid_email(&self.email) {
            errors.insert(ContactField::Email, EMAIL_REQUIRED);
        }
        if self.message.trim().is_empty() {
            errors.insert(ContactField::Message, MESSAGE_REQUIRED);
        }
        errors
    }

    /// Validates and builds the outgoing payload, substituting the default
    /// subject for a blank one.
    pub fn to_payload(&self) -> Result<ContactPayload, FieldErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        let subject = if self.subject.trim().is_empty() {
            DEFAULT_SUBJECT.to_string()
        } else {
            self.subject.clone()
        };
        Ok(ContactPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            subject,
            message: self.message.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("jane@x.com"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(is_valid_email("a@.c.o"));
        assert!(is_valid_email("contact me at a@b.co please"));

        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("   "));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a @b.co"));
        assert!(!is_valid_email("a\u{a0}@b.co"));
    }

    #[test]
    fn test_missing_fields_report_messages() {
        let errors = form("", "", "", "").validate();
        assert_eq!(errors.get(ContactField::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(ContactField::Email), Some("Valid email is required"));
        assert_eq!(errors.get(ContactField::Message), Some(MESSAGE_REQUIRED));
        assert_eq!(errors.get(ContactField::Subject), None);
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_whitespace_name_is_missing() {
        let errors = form("   ", "a@b.co", "", "Hi").validate();
        assert_eq!(errors.get(ContactField::Name), Some("Name is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_payload_defaults_subject() {
        let payload = form("Jane", "jane@x.com", "", "Hi").to_payload().unwrap();
        assert_eq!(payload.subject, DEFAULT_SUBJECT);

        let payload = form("Jane", "jane@x.com", "Hello", "Hi").to_payload().unwrap();
        assert_eq!(payload.subject, "Hello");
    }

    #[test]
    fn test_set_and_get_fields() {
        let mut f = ContactForm::default();
        f.set(ContactField::Email, "x@y.z".to_string());
        assert_eq!(f.get(ContactField::Email), "x@y.z");
        f.clear();
        assert_eq!(f, ContactForm::default());
    }
}
