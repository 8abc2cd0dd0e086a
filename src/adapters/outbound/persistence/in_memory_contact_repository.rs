use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    domain::{
        errors::StorageResult,
        models::{ContactForm, ContactSubmission},
        value_objects::SubmissionId,
    },
    ports::repositories::ContactRepository,
};

/// In-memory implementation of ContactRepository for testing and development
#[derive(Clone, Default)]
pub struct InMemoryContactRepository {
    submissions: Arc<RwLock<Vec<ContactSubmission>>>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored submission, oldest first
    pub async fn all(&self) -> Vec<ContactSubmission> {
        self.submissions.read().await.clone()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn save(&self, form: &ContactForm) -> StorageResult<ContactSubmission> {
        let submission = ContactSubmission::accept(form);

        // Single push under the write lock
        self.submissions.write().await.push(submission.clone());

        Ok(submission)
    }

    async fn get(&self, id: &SubmissionId) -> StorageResult<Option<ContactSubmission>> {
        let submissions = self.submissions.read().await;

        Ok(submissions.iter().find(|s| &s.id == id).cloned())
    }

    async fn count(&self) -> StorageResult<usize> {
        Ok(self.submissions.read().await.len())
    }
}
