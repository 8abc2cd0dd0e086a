use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::{
    domain::{
        errors::{ContactError, ContactResult, ValidationErrors},
        models::{ContactForm, ContactReceipt},
        validation::validate_contact_payload,
    },
    ports::{repositories::ContactRepository, services::ContactService},
};

/// Confirmation shown to a visitor whose message was recorded
pub const DEFAULT_CONFIRMATION_MESSAGE: &str =
    "Thank you for your message! I'll get back to you within 24 hours.";

/// Implementation of ContactService over any ContactRepository
#[derive(Clone)]
pub struct ContactServiceImpl {
    repository: Arc<dyn ContactRepository>,
    confirmation_message: String,
}

impl ContactServiceImpl {
    /// Create a new ContactServiceImpl with the default confirmation message
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self {
            repository,
            confirmation_message: DEFAULT_CONFIRMATION_MESSAGE.to_string(),
        }
    }

    pub fn builder() -> ContactServiceBuilder {
        ContactServiceBuilder::new()
    }

    pub fn confirmation_message(&self) -> &str {
        &self.confirmation_message
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    fn validate(&self, payload: &serde_json::Value) -> Result<ContactForm, ValidationErrors> {
        validate_contact_payload(payload)
    }

    async fn submit(&self, payload: &serde_json::Value) -> ContactResult<ContactReceipt> {
        let form = self.validate(payload).map_err(|errors| {
            warn!(
                fields = ?errors.fields(),
                violations = errors.len(),
                "Rejected contact form submission"
            );
            ContactError::Validation(errors)
        })?;

        let submission = self.repository.save(&form).await.map_err(|e| {
            error!(error = %e, "Failed to store contact submission");
            ContactError::Storage(e)
        })?;

        info!(
            id = %submission.id,
            name = %submission.name,
            email = %submission.email,
            company = %submission.company_or_default(),
            created_at = %submission.created_at.to_rfc3339(),
            "Contact form submission recorded"
        );
        debug!(
            id = %submission.id,
            message_chars = submission.message.chars().count(),
            "Contact message stored"
        );

        Ok(ContactReceipt {
            submission,
            message: self.confirmation_message.clone(),
        })
    }
}

/// Builder for ContactServiceImpl
pub struct ContactServiceBuilder {
    repository: Option<Arc<dyn ContactRepository>>,
    confirmation_message: Option<String>,
}

impl ContactServiceBuilder {
    pub fn new() -> Self {
        Self {
            repository: None,
            confirmation_message: None,
        }
    }

    pub fn repository(mut self, repository: Arc<dyn ContactRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    pub fn confirmation_message(mut self, message: impl Into<String>) -> Self {
        self.confirmation_message = Some(message.into());
        self
    }

    pub fn build(self) -> Result<ContactServiceImpl, &'static str> {
        let repository = self.repository.ok_or("Repository is required")?;

        let mut service = ContactServiceImpl::new(repository);
        if let Some(message) = self.confirmation_message {
            service.confirmation_message = message;
        }

        Ok(service)
    }
}

impl Default for ContactServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        adapters::outbound::persistence::InMemoryContactRepository,
        domain::{
            errors::{ContactField, StorageError, StorageResult},
            models::ContactSubmission,
            value_objects::SubmissionId,
        },
    };
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts calls and refuses every write
    #[derive(Default)]
    struct UnavailableRepository {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ContactRepository for UnavailableRepository {
        async fn save(&self, _form: &ContactForm) -> StorageResult<ContactSubmission> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(StorageError::unavailable("test", "connection refused"))
        }

        async fn get(&self, _id: &SubmissionId) -> StorageResult<Option<ContactSubmission>> {
            Ok(None)
        }

        async fn count(&self) -> StorageResult<usize> {
            Ok(0)
        }
    }

    fn valid_payload() -> serde_json::Value {
        json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "company": "Acme",
            "message": "Interested in collaborating on a project."
        })
    }

    #[tokio::test]
    async fn test_submit_records_submission() {
        let repository = Arc::new(InMemoryContactRepository::new());
        let service = ContactServiceImpl::new(repository.clone());

        let receipt = service.submit(&valid_payload()).await.unwrap();

        assert_eq!(receipt.message, DEFAULT_CONFIRMATION_MESSAGE);
        assert_eq!(receipt.submission.company.as_deref(), Some("Acme"));
        assert_eq!(repository.count().await.unwrap(), 1);
        assert_eq!(
            repository.get(&receipt.submission.id).await.unwrap(),
            Some(receipt.submission)
        );
    }

    #[tokio::test]
    async fn test_invalid_payload_never_reaches_repository() {
        let repository = Arc::new(UnavailableRepository::default());
        let service = ContactServiceImpl::new(repository.clone());

        let err = service
            .submit(&json!({ "name": "Jane", "email": "jane@example.com", "message": "short" }))
            .await
            .unwrap_err();

        match err {
            ContactError::Validation(errors) => {
                assert_eq!(errors.fields(), vec![ContactField::Message])
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
        assert_eq!(repository.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_storage_failure_is_not_retried() {
        let repository = Arc::new(UnavailableRepository::default());
        let service = ContactServiceImpl::new(repository.clone());

        let err = service.submit(&valid_payload()).await.unwrap_err();

        assert!(matches!(err, ContactError::Storage(StorageError::Unavailable { .. })));
        assert_eq!(repository.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_builder() {
        let service = ContactServiceImpl::builder()
            .repository(Arc::new(InMemoryContactRepository::new()))
            .confirmation_message("Thanks, talk soon!")
            .build()
            .unwrap();

        let receipt = service.submit(&valid_payload()).await.unwrap();
        assert_eq!(receipt.message, "Thanks, talk soon!");

        assert!(ContactServiceBuilder::new().build().is_err());
    }
}
