use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ContactEmail, MessageBody, PersonName, SubmissionId};

/// A contact form that passed validation and may be stored
#[derive(Debug, Clone, PartialEq)]
pub struct ContactForm {
    pub name: PersonName,
    pub email: ContactEmail,
    /// `None` when the visitor left the field absent or empty
    pub company: Option<String>,
    pub message: MessageBody,
}

/// A stored contact submission. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bon::Builder)]
pub struct ContactSubmission {
    pub id: SubmissionId,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl ContactSubmission {
    /// Accept a validated form, assigning a fresh id and the current time
    pub fn accept(form: &ContactForm) -> Self {
        Self::builder()
            .id(SubmissionId::generate())
            .name(form.name.as_str().to_string())
            .email(form.email.as_str().to_string())
            .maybe_company(form.company.clone())
            .message(form.message.as_str().to_string())
            .created_at(Utc::now())
            .build()
    }

    /// Company for display and logs
    pub fn company_or_default(&self) -> &str {
        self.company.as_deref().unwrap_or("Not specified")
    }
}

/// What the service hands back after a submission was recorded
#[derive(Debug, Clone)]
pub struct ContactReceipt {
    pub submission: ContactSubmission,
    /// Human-readable confirmation for the visitor
    pub message: String,
}
