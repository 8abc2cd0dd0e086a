pub mod errors;
pub mod models;
pub mod validation;
pub mod value_objects;

// Re-export commonly used types
pub use errors::{
    ContactError, ContactField, ContactResult, FieldViolation, StorageError, StorageResult,
    ValidationErrors, ViolationCode,
};
pub use models::*;
pub use validation::validate_contact_payload;
pub use value_objects::*;
