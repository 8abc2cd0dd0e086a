use crate::domain::{
    errors::StorageResult,
    models::{ContactForm, ContactSubmission},
    value_objects::SubmissionId,
};
use async_trait::async_trait;

/// Append-only store of contact submissions.
///
/// Implementations must record each submission atomically: a concurrent
/// reader sees either the whole record or nothing.
#[async_trait]
pub trait ContactRepository: Send + Sync + 'static {
    /// Record a validated form, assigning its id and creation time
    async fn save(&self, form: &ContactForm) -> StorageResult<ContactSubmission>;

    /// Fetch a stored submission by id
    async fn get(&self, id: &SubmissionId) -> StorageResult<Option<ContactSubmission>>;

    /// Number of stored submissions
    async fn count(&self) -> StorageResult<usize>;
}
