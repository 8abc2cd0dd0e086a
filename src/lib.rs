pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export key types for convenience

// Domain types - the submission entity, its value objects and errors
pub use domain::{
    ContactEmail,
    ContactError,
    ContactField,
    // Models
    ContactForm,
    ContactReceipt,
    ContactSubmission,
    FieldViolation,
    MessageBody,
    // Value objects
    PersonName,
    // Errors
    StorageError,
    SubmissionId,
    ValidationErrors,
    ViolationCode,
    validate_contact_payload,
};

// Port types - interfaces for external systems
pub use ports::{ContactRepository, ContactService};

// Service implementations - business logic
pub use services::{ContactServiceBuilder, ContactServiceImpl, DEFAULT_CONFIRMATION_MESSAGE};

// Application factory and configuration
pub use app::{
    AppBuilder, AppConfig, AppDependencies, AppError, AppServices, RepositoryBackend,
    create_app_from_env, create_database_app, create_in_memory_app, create_local_app,
    create_s3_app,
};

// Adapter types - infrastructure implementations
pub use adapters::outbound::{
    persistence::{InMemoryContactRepository, ObjectStoreContactRepository, SqlContactRepository},
    storage::S3Config,
};

// Public facade for easy construction
pub mod prelude {
    pub use crate::{
        AppBuilder, AppServices, ContactRepository, ContactService, ContactServiceImpl,
        InMemoryContactRepository, ObjectStoreContactRepository, RepositoryBackend,
        SqlContactRepository, create_in_memory_app,
        adapters::inbound::http::router::{AppState, create_router},
    };
}
