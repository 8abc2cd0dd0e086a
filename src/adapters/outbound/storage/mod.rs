//! Construction of `object_store` backends for the object-store contact
//! repository.

use object_store::{ObjectStore as ObjectStoreBackend, aws::AmazonS3Builder, local::LocalFileSystem};
use std::{path::Path, sync::Arc};

/// Configuration for S3 storage backend
#[derive(Debug, Clone)]
pub struct S3Config {
    pub bucket: String,
    pub region: String,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    /// Custom endpoint for S3-compatible services (MinIO, R2, ...)
    pub endpoint: Option<String>,
}

/// Create an S3 store from configuration
pub fn create_s3_store(config: &S3Config) -> object_store::Result<Arc<dyn ObjectStoreBackend>> {
    let mut builder = AmazonS3Builder::new()
        .with_bucket_name(&config.bucket)
        .with_region(&config.region);

    if let Some(access_key) = &config.access_key {
        builder = builder.with_access_key_id(access_key);
    }

    if let Some(secret_key) = &config.secret_key {
        builder = builder.with_secret_access_key(secret_key);
    }

    if let Some(endpoint) = &config.endpoint {
        builder = builder
            .with_endpoint(endpoint)
            .with_allow_http(endpoint.starts_with("http://"));
    }

    Ok(Arc::new(builder.build()?))
}

/// Create a store rooted at an existing local directory
pub fn create_local_store(root: &Path) -> object_store::Result<Arc<dyn ObjectStoreBackend>> {
    Ok(Arc::new(LocalFileSystem::new_with_prefix(root)?))
}
