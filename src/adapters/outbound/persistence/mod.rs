mod in_memory_contact_repository;
mod object_store_contact_repository;
mod sql_contact_repository;

pub use in_memory_contact_repository::InMemoryContactRepository;
pub use object_store_contact_repository::{ObjectStoreContactRepository, SUBMISSIONS_PREFIX};
pub use sql_contact_repository::SqlContactRepository;
