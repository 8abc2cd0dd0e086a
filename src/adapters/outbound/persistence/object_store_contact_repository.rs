use async_trait::async_trait;
use futures::TryStreamExt;
use object_store::{
    ObjectStore as ObjectStoreBackend, PutMode, PutPayload, path::Path as ObjectPath,
};
use std::sync::Arc;

use crate::{
    domain::{
        errors::{StorageError, StorageResult},
        models::{ContactForm, ContactSubmission},
        value_objects::SubmissionId,
    },
    ports::repositories::ContactRepository,
};

/// Prefix under which every submission object is written
pub const SUBMISSIONS_PREFIX: &str = "contact-submissions";

/// ContactRepository that writes one JSON object per submission to any
/// `object_store` backend (in-memory, local filesystem, S3).
///
/// Writes use `PutMode::Create`, so a record is either fully present or
/// absent and an existing record is never overwritten.
#[derive(Clone)]
pub struct ObjectStoreContactRepository {
    store: Arc<dyn ObjectStoreBackend>,
}

impl ObjectStoreContactRepository {
    pub fn new(store: Arc<dyn ObjectStoreBackend>) -> Self {
        Self { store }
    }

    /// Location of a submission's JSON document
    pub fn object_path(id: &SubmissionId) -> ObjectPath {
        ObjectPath::from(format!("{}/{}.json", SUBMISSIONS_PREFIX, id))
    }

    fn convert_error(err: object_store::Error, id: Option<&SubmissionId>) -> StorageError {
        match (err, id) {
            (object_store::Error::AlreadyExists { .. }, Some(id)) => {
                StorageError::AlreadyExists { id: *id }
            }
            (object_store::Error::NotImplemented, _) => StorageError::InternalError {
                message: "Object store does not support create-only writes".to_string(),
            },
            (err, _) => StorageError::infrastructure("Object store request failed", err),
        }
    }
}

#[async_trait]
impl ContactRepository for ObjectStoreContactRepository {
    async fn save(&self, form: &ContactForm) -> StorageResult<ContactSubmission> {
        let submission = ContactSubmission::accept(form);
        let path = Self::object_path(&submission.id);
        let body = serde_json::to_vec(&submission)?;

        self.store
            .put_opts(&path, PutPayload::from(body), PutMode::Create.into())
            .await
            .map_err(|e| Self::convert_error(e, Some(&submission.id)))?;

        Ok(submission)
    }

    async fn get(&self, id: &SubmissionId) -> StorageResult<Option<ContactSubmission>> {
        let path = Self::object_path(id);

        let result = match self.store.get(&path).await {
            Ok(result) => result,
            Err(object_store::Error::NotFound { .. }) => return Ok(None),
            Err(e) => return Err(Self::convert_error(e, Some(id))),
        };

        let bytes = result
            .bytes()
            .await
            .map_err(|e| Self::convert_error(e, Some(id)))?;

        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    async fn count(&self) -> StorageResult<usize> {
        let prefix = ObjectPath::from(SUBMISSIONS_PREFIX);

        self.store
            .list(Some(&prefix))
            .try_fold(0usize, |count, meta| async move {
                Ok(match meta.location.extension() {
                    Some("json") => count + 1,
                    _ => count,
                })
            })
            .await
            .map_err(|e| Self::convert_error(e, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{ContactEmail, MessageBody, PersonName};
    use object_store::memory::InMemory;

    fn form() -> ContactForm {
        ContactForm {
            name: PersonName::new("Jane Doe".to_string()).unwrap(),
            email: ContactEmail::new("jane@example.com".to_string()).unwrap(),
            company: Some("Acme".to_string()),
            message: MessageBody::new("Interested in collaborating.".to_string()).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_save_writes_json_document() {
        let store = Arc::new(InMemory::new());
        let repo = ObjectStoreContactRepository::new(store.clone());

        let saved = repo.save(&form()).await.unwrap();

        let bytes = store
            .get(&ObjectStoreContactRepository::object_path(&saved.id))
            .await
            .unwrap()
            .bytes()
            .await
            .unwrap();
        let document: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(document["name"], "Jane Doe");
        assert_eq!(document["company"], "Acme");
        assert_eq!(document["id"], saved.id.to_string());
    }

    #[tokio::test]
    async fn test_get_and_count() {
        let repo = ObjectStoreContactRepository::new(Arc::new(InMemory::new()));
        assert_eq!(repo.count().await.unwrap(), 0);

        let first = repo.save(&form()).await.unwrap();
        let second = repo.save(&form()).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 2);
        assert_eq!(repo.get(&first.id).await.unwrap(), Some(first));
        assert_eq!(repo.get(&second.id).await.unwrap(), Some(second));
        assert_eq!(repo.get(&SubmissionId::generate()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_count_ignores_foreign_objects() {
        let store = Arc::new(InMemory::new());
        store
            .put(
                &ObjectPath::from(format!("{}/README.txt", SUBMISSIONS_PREFIX)),
                PutPayload::from_static(b"not a submission"),
            )
            .await
            .unwrap();
        store
            .put(
                &ObjectPath::from("elsewhere/other.json"),
                PutPayload::from_static(b"{}"),
            )
            .await
            .unwrap();

        let repo = ObjectStoreContactRepository::new(store);
        repo.save(&form()).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_existing_record_is_never_overwritten() {
        let store = Arc::new(InMemory::new());
        let repo = ObjectStoreContactRepository::new(store.clone());
        let saved = repo.save(&form()).await.unwrap();

        let err = store
            .put_opts(
                &ObjectStoreContactRepository::object_path(&saved.id),
                PutPayload::from_static(b"{}"),
                PutMode::Create.into(),
            )
            .await
            .unwrap_err();
        assert!(matches!(
            ObjectStoreContactRepository::convert_error(err, Some(&saved.id)),
            StorageError::AlreadyExists { .. }
        ));

        assert_eq!(repo.get(&saved.id).await.unwrap(), Some(saved));
    }
}
