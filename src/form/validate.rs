//! Validation rules for the contact form.
//!
//! Validation runs once per submit attempt, never on edit. Each pass
//! evaluates every rule (no short-circuit) and produces a fresh error map
//! that replaces the previous one wholesale; a field is present in the map
//! iff it currently fails its rule.

use crate::form::{Field, FormFields, PhoneValue};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

pub type ValidationErrors = BTreeMap<Field, &'static str>;

pub const ERR_NAME: &str = "Name required (min 2 chars)";
pub const ERR_EMAIL: &str = "Valid email required";
pub const ERR_MESSAGE: &str = "Message should be at least 10 characters";
pub const ERR_PHONE: &str = "Enter a valid phone";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+\d\s-]{6,15}$").unwrap());

/// Validate a snapshot of the form. Pure: the caller stores the returned
/// map. The form is valid iff the map is empty.
pub fn validate(fields: &FormFields) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if fields.name.trim().chars().count() < 2 {
        errors.insert(Field::Name, ERR_NAME);
    }

    if !EMAIL_RE.is_match(&fields.email) {
        errors.insert(Field::Email, ERR_EMAIL);
    }

    if fields.message.trim().chars().count() < 10 {
        errors.insert(Field::Message, ERR_MESSAGE);
    }

    match PhoneValue::from_raw(&fields.phone) {
        PhoneValue::Absent => {}
        PhoneValue::Present(phone) => {
            if !PHONE_RE.is_match(phone) {
                errors.insert(Field::Phone, ERR_PHONE);
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> FormFields {
        FormFields {
            name: "Al".into(),
            email: "a@b.co".into(),
            phone: String::new(),
            message: "Hello there, this works".into(),
        }
    }

    #[test]
    fn test_all_valid() {
        let errors = validate(&valid_fields());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_valid_with_phone() {
        let mut fields = valid_fields();
        fields.phone = "+91 98736 84567".into();
        assert!(validate(&fields).is_empty());
        fields.phone = "123-456".into();
        assert!(validate(&fields).is_empty());
    }

    #[test]
    fn test_name_rule() {
        let mut fields = valid_fields();
        for bad in ["", "  ", "A", " A "] {
            fields.name = bad.into();
            let errors = validate(&fields);
            assert_eq!(errors.len(), 1, "name {:?}", bad);
            assert_eq!(errors.get(&Field::Name), Some(&ERR_NAME));
        }
    }

    #[test]
    fn test_email_rule() {
        let mut fields = valid_fields();
        for bad in ["", "bad", "a@b", "a b@c.d", "a@b.c d"] {
            fields.email = bad.into();
            let errors = validate(&fields);
            assert_eq!(errors.len(), 1, "email {:?}", bad);
            assert_eq!(errors.get(&Field::Email), Some(&ERR_EMAIL));
        }
    }

    #[test]
    fn test_message_rule() {
        let mut fields = valid_fields();
        for bad in ["", "short", "  nine ch  "] {
            fields.message = bad.into();
            let errors = validate(&fields);
            assert_eq!(errors.len(), 1, "message {:?}", bad);
            assert_eq!(errors.get(&Field::Message), Some(&ERR_MESSAGE));
        }
    }

    #[test]
    fn test_phone_optional_but_checked_when_present() {
        let mut fields = valid_fields();
        fields.phone = String::new();
        assert!(validate(&fields).is_empty());

        for bad in ["12345", "1234567890123456", "abc123", "12 34 5x"] {
            fields.phone = bad.into();
            let errors = validate(&fields);
            assert_eq!(errors.len(), 1, "phone {:?}", bad);
            assert_eq!(errors.get(&Field::Phone), Some(&ERR_PHONE));
        }
    }

    #[test]
    fn test_all_rules_reported_together() {
        let fields = FormFields {
            name: "".into(),
            email: "bad".into(),
            phone: "123".into(),
            message: "short".into(),
        };
        let errors = validate(&fields);
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(&Field::Name), Some(&ERR_NAME));
        assert_eq!(errors.get(&Field::Email), Some(&ERR_EMAIL));
        assert_eq!(errors.get(&Field::Phone), Some(&ERR_PHONE));
        assert_eq!(errors.get(&Field::Message), Some(&ERR_MESSAGE));
    }

    #[test]
    fn test_revalidation_replaces_map() {
        let mut fields = valid_fields();
        fields.name = "".into();
        let first = validate(&fields);
        assert!(first.contains_key(&Field::Name));

        fields.name = "Alice".into();
        let second = validate(&fields);
        assert!(second.is_empty());
    }
}
