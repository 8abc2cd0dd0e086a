use serde::Serialize;

/// A field of the contact form, or the form itself when the payload
/// is not an object at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Form,
    Name,
    Email,
    Company,
    Message,
}

impl ContactField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Form => "form",
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Company => "company",
            ContactField::Message => "message",
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which rule a field violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    /// Field missing or not a string
    InvalidType,
    /// Text shorter than the field's minimum length
    TooSmall,
    /// Text present but not in the required format
    InvalidString,
}

impl ViolationCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationCode::InvalidType => "invalid_type",
            ViolationCode::TooSmall => "too_small",
            ViolationCode::InvalidString => "invalid_string",
        }
    }
}

/// A single field-level rule violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: ContactField,
    pub code: ViolationCode,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: ContactField, code: ViolationCode, message: impl Into<String>) -> Self {
        Self {
            field,
            code,
            message: message.into(),
        }
    }

    pub fn required(field: ContactField) -> Self {
        Self::new(field, ViolationCode::InvalidType, "Required")
    }

    pub fn expected_string(field: ContactField, received: &str) -> Self {
        Self::new(
            field,
            ViolationCode::InvalidType,
            format!("Expected string, received {}", received),
        )
    }
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every violation found in a rejected contact form, in field order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self(violations)
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether any violation concerns the given field
    pub fn has_field(&self, field: ContactField) -> bool {
        self.0.iter().any(|v| v.field == field)
    }

    /// Names of the offending fields, without duplicates
    pub fn fields(&self) -> Vec<ContactField> {
        let mut fields: Vec<ContactField> = Vec::new();
        for violation in &self.0 {
            if !fields.contains(&violation.field) {
                fields.push(violation.field);
            }
        }
        fields
    }
}

impl From<FieldViolation> for ValidationErrors {
    fn from(violation: FieldViolation) -> Self {
        Self(vec![violation])
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|v| v.to_string()).collect();
        write!(f, "Invalid form data: {}", parts.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}
