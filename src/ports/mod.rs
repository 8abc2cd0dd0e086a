pub mod repositories;
pub mod services;

// Re-export all port traits for convenience
pub use repositories::ContactRepository;
pub use services::ContactService;
