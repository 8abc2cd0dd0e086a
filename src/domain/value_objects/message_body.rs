use crate::domain::errors::{ContactField, FieldViolation, ViolationCode};

/// A contact message of at least [`MessageBody::MIN_CHARS`] characters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageBody(String);

impl MessageBody {
    pub const MIN_CHARS: usize = 10;

    /// Create a new MessageBody. Length is counted in characters, not bytes.
    pub fn new(value: String) -> Result<Self, FieldViolation> {
        if value.chars().count() < Self::MIN_CHARS {
            return Err(FieldViolation::new(
                ContactField::Message,
                ViolationCode::TooSmall,
                format!("Message must be at least {} characters", Self::MIN_CHARS),
            ));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MessageBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
