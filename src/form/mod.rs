//! Form data model: field identities, the submission payload, and validation.

pub mod validate;

use serde::Serialize;

/// The four contact-form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Your name*",
            Field::Email => "Your email*",
            Field::Phone => "Phone",
            Field::Message => "Your message*",
        }
    }
}

/// Snapshot of the form contents. Serializes to the exact JSON object the
/// endpoint expects: the four keys, string values, phone possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Phone is optional: an empty field is valid, a non-empty one must match
/// the phone pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhoneValue<'a> {
    Absent,
    Present(&'a str),
}

impl<'a> PhoneValue<'a> {
    pub fn from_raw(raw: &'a str) -> Self {
        if raw.is_empty() {
            PhoneValue::Absent
        } else {
            PhoneValue::Present(raw)
        }
    }
}
