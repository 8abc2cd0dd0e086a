use super::{StorageError, ValidationErrors};

/// Failure of a contact submission, as seen by the service port.
///
/// Validation failures are the caller's to fix and are reported in full.
/// Storage failures are reported to callers only as a generic message.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactError {
    #[error("{0}")]
    Validation(ValidationErrors),

    #[error("Failed to record submission: {0}")]
    Storage(#[from] StorageError),
}

impl From<ValidationErrors> for ContactError {
    fn from(errors: ValidationErrors) -> Self {
        ContactError::Validation(errors)
    }
}

/// Result type for contact operations
pub type ContactResult<T> = Result<T, ContactError>;
