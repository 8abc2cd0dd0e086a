use crate::domain::{
    errors::{ContactResult, ValidationErrors},
    models::{ContactForm, ContactReceipt},
};
use async_trait::async_trait;

/// Port for the contact-form submission flow: validate, persist, confirm
#[async_trait]
pub trait ContactService: Send + Sync + 'static {
    /// Validate an untrusted payload without storing anything
    fn validate(&self, payload: &serde_json::Value) -> Result<ContactForm, ValidationErrors>;

    /// Validate and record a submission. The repository is only called
    /// once validation succeeded, and is never retried.
    async fn submit(&self, payload: &serde_json::Value) -> ContactResult<ContactReceipt>;
}
