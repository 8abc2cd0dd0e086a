//! Schema check for untrusted contact-form payloads.
//!
//! Every field is inspected and all violations are returned together, so a
//! visitor sees every problem with the form at once.

use serde_json::{Map, Value};

use crate::domain::{
    errors::{ContactField, FieldViolation, ValidationErrors, ViolationCode},
    models::ContactForm,
    value_objects::{ContactEmail, MessageBody, PersonName},
};

/// Validate a raw JSON payload into a [`ContactForm`].
///
/// `name`, `email` and `message` are required strings. `company` may be
/// absent, `null` or empty, all of which yield `None`. Unknown fields are
/// ignored.
pub fn validate_contact_payload(payload: &Value) -> Result<ContactForm, ValidationErrors> {
    let object = match payload {
        Value::Object(object) => object,
        other => {
            return Err(FieldViolation::new(
                ContactField::Form,
                ViolationCode::InvalidType,
                format!("Expected object, received {}", type_name(other)),
            )
            .into());
        }
    };

    let mut violations = Vec::new();

    let name = required_string(object, ContactField::Name)
        .and_then(PersonName::new)
        .map_err(|v| violations.push(v))
        .ok();

    let email = required_string(object, ContactField::Email)
        .and_then(ContactEmail::new)
        .map_err(|v| violations.push(v))
        .ok();

    let company = optional_string(object, ContactField::Company)
        .map_err(|v| violations.push(v))
        .ok()
        .flatten();

    let message = required_string(object, ContactField::Message)
        .and_then(MessageBody::new)
        .map_err(|v| violations.push(v))
        .ok();

    match (name, email, message) {
        (Some(name), Some(email), Some(message)) if violations.is_empty() => Ok(ContactForm {
            name,
            email,
            company,
            message,
        }),
        _ => Err(ValidationErrors::new(violations)),
    }
}

fn required_string(
    object: &Map<String, Value>,
    field: ContactField,
) -> Result<String, FieldViolation> {
    match object.get(field.as_str()) {
        None => Err(FieldViolation::required(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(FieldViolation::expected_string(field, type_name(other))),
    }
}

fn optional_string(
    object: &Map<String, Value>,
    field: ContactField,
) -> Result<Option<String>, FieldViolation> {
    match object.get(field.as_str()) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(FieldViolation::expected_string(field, type_name(other))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
