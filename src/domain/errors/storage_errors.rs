use crate::domain::value_objects::SubmissionId;

/// Errors that can occur while recording or reading submissions
#[derive(Debug, Clone)]
pub enum StorageError {
    /// Backend cannot be reached at all
    Unavailable { backend: String, message: String },

    /// A record with this id already exists (create-only writes)
    AlreadyExists { id: SubmissionId },

    /// Stored record could not be encoded or decoded
    Serialization { message: String },

    /// Infrastructure error with external source
    InfrastructureError {
        message: String,
        source: Option<String>, // Store error as string to allow Clone
    },

    /// Generic storage error
    InternalError { message: String },
}

impl StorageError {
    pub fn unavailable(backend: impl Into<String>, message: impl Into<String>) -> Self {
        StorageError::Unavailable {
            backend: backend.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>, source: impl std::fmt::Display) -> Self {
        StorageError::InfrastructureError {
            message: message.into(),
            source: Some(source.to_string()),
        }
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable { backend, message } => {
                write!(f, "Storage backend '{}' unavailable: {}", backend, message)
            }
            StorageError::AlreadyExists { id } => {
                write!(f, "Submission already exists: {}", id)
            }
            StorageError::Serialization { message } => {
                write!(f, "Serialization error: {}", message)
            }
            StorageError::InfrastructureError { message, source } => match source {
                Some(source) => write!(f, "Infrastructure error: {} ({})", message, source),
                None => write!(f, "Infrastructure error: {}", message),
            },
            StorageError::InternalError { message } => {
                write!(f, "Internal storage error: {}", message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
