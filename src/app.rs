use sqlx::postgres::PgPoolOptions;
use std::{path::PathBuf, sync::Arc, time::Duration};
use tracing::info;

use crate::{
    adapters::{
        inbound::http::router::AppState,
        outbound::{
            persistence::{
                InMemoryContactRepository, ObjectStoreContactRepository, SqlContactRepository,
            },
            storage::{S3Config, create_local_store, create_s3_store},
        },
    },
    ports::repositories::ContactRepository,
    services::ContactServiceImpl,
};

/// Configuration for the application
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub repository_backend: RepositoryBackend,
    /// Overrides the default confirmation shown after a successful submission
    pub confirmation_message: Option<String>,
}

/// Where contact submissions are recorded
#[derive(Debug, Clone, Default)]
pub enum RepositoryBackend {
    #[default]
    InMemory,
    /// One JSON document per submission under a local directory
    LocalFileSystem { root: PathBuf },
    /// One JSON document per submission in an S3 (or S3-compatible) bucket
    S3(S3Config),
    /// PostgreSQL table
    Database { connection_string: String },
}

impl RepositoryBackend {
    pub fn name(&self) -> &'static str {
        match self {
            RepositoryBackend::InMemory => "memory",
            RepositoryBackend::LocalFileSystem { .. } => "local",
            RepositoryBackend::S3(_) => "s3",
            RepositoryBackend::Database { .. } => "database",
        }
    }

    /// Resolve a backend from configuration values looked up by key
    /// (environment variable names).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| AppError::Configuration {
                message: format!("{} environment variable required", key),
            })
        };

        match lookup("REPOSITORY_BACKEND").as_deref() {
            None | Some("memory") => Ok(RepositoryBackend::InMemory),
            Some("local") => Ok(RepositoryBackend::LocalFileSystem {
                root: PathBuf::from(lookup("DATA_DIR").unwrap_or_else(|| "./data".to_string())),
            }),
            Some("s3") => Ok(RepositoryBackend::S3(S3Config {
                bucket: required("S3_BUCKET")?,
                region: lookup("S3_REGION").unwrap_or_else(|| "us-east-1".to_string()),
                access_key: lookup("S3_ACCESS_KEY"),
                secret_key: lookup("S3_SECRET_KEY"),
                endpoint: lookup("S3_ENDPOINT"),
            })),
            Some("database") | Some("db") => Ok(RepositoryBackend::Database {
                connection_string: required("DATABASE_URL")?,
            }),
            Some(other) => Err(AppError::Configuration {
                message: format!("Unknown repository backend: {}", other),
            }),
        }
    }
}

/// Application dependencies container
pub struct AppDependencies {
    pub contact_repository: Arc<dyn ContactRepository>,
}

/// Application services container
pub struct AppServices {
    pub contact_service: ContactServiceImpl,
}

impl AppServices {
    /// State for the HTTP router
    pub fn into_state(self) -> AppState {
        AppState {
            contact_service: Arc::new(self.contact_service),
        }
    }
}

/// Application builder for dependency injection
pub struct AppBuilder {
    config: AppConfig,
}

impl AppBuilder {
    /// Create a new application builder
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Configure the application with custom settings
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Configure repository backend
    pub fn with_repository_backend(mut self, backend: RepositoryBackend) -> Self {
        self.config.repository_backend = backend;
        self
    }

    /// Configure the confirmation message
    pub fn with_confirmation_message(mut self, message: impl Into<String>) -> Self {
        self.config.confirmation_message = Some(message.into());
        self
    }

    /// Build the application dependencies
    pub async fn build_dependencies(self) -> Result<AppDependencies, AppError> {
        let contact_repository = self.create_repository().await?;

        Ok(AppDependencies { contact_repository })
    }

    /// Build the complete application with services
    pub async fn build(self) -> Result<AppServices, AppError> {
        let confirmation_message = self.config.confirmation_message.clone();
        let deps = self.build_dependencies().await?;

        let mut builder = ContactServiceImpl::builder().repository(deps.contact_repository);
        if let Some(message) = confirmation_message {
            builder = builder.confirmation_message(message);
        }

        let contact_service = builder.build().map_err(|e| AppError::ServiceInit {
            message: e.to_string(),
        })?;

        Ok(AppServices { contact_service })
    }

    /// Create the repository based on configuration
    async fn create_repository(&self) -> Result<Arc<dyn ContactRepository>, AppError> {
        match &self.config.repository_backend {
            RepositoryBackend::InMemory => Ok(Arc::new(InMemoryContactRepository::new())),
            RepositoryBackend::LocalFileSystem { root } => {
                tokio::fs::create_dir_all(root)
                    .await
                    .map_err(|e| AppError::StorageInit {
                        message: format!("Cannot create data directory {}: {}", root.display(), e),
                    })?;

                let store = create_local_store(root).map_err(|e| AppError::StorageInit {
                    message: e.to_string(),
                })?;
                info!(root = %root.display(), "Recording submissions on local filesystem");

                Ok(Arc::new(ObjectStoreContactRepository::new(store)))
            }
            RepositoryBackend::S3(config) => {
                let store = create_s3_store(config).map_err(|e| AppError::StorageInit {
                    message: e.to_string(),
                })?;
                info!(bucket = %config.bucket, region = %config.region, "Recording submissions in S3");

                Ok(Arc::new(ObjectStoreContactRepository::new(store)))
            }
            RepositoryBackend::Database { connection_string } => {
                let pool = PgPoolOptions::new()
                    .max_connections(5)
                    .acquire_timeout(Duration::from_secs(5))
                    .connect(connection_string)
                    .await
                    .map_err(|e| AppError::RepositoryInit {
                        message: format!("Cannot connect to database: {}", e),
                    })?;

                let repository = SqlContactRepository::new(pool);
                repository
                    .migrate()
                    .await
                    .map_err(|e| AppError::RepositoryInit {
                        message: format!("Migration failed: {}", e),
                    })?;
                info!("Recording submissions in PostgreSQL");

                Ok(Arc::new(repository))
            }
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Storage initialization error: {message}")]
    StorageInit { message: String },

    #[error("Repository initialization error: {message}")]
    RepositoryInit { message: String },

    #[error("Service initialization error: {message}")]
    ServiceInit { message: String },
}

/// Convenience functions for common configurations
///
/// Create an in-memory application for testing and development
pub async fn create_in_memory_app() -> Result<AppServices, AppError> {
    AppBuilder::new()
        .with_repository_backend(RepositoryBackend::InMemory)
        .build()
        .await
}

/// Create an application recording submissions under a local directory
pub async fn create_local_app(root: impl Into<PathBuf>) -> Result<AppServices, AppError> {
    AppBuilder::new()
        .with_repository_backend(RepositoryBackend::LocalFileSystem { root: root.into() })
        .build()
        .await
}

/// Create an S3-backed application
pub async fn create_s3_app(config: S3Config) -> Result<AppServices, AppError> {
    AppBuilder::new()
        .with_repository_backend(RepositoryBackend::S3(config))
        .build()
        .await
}

/// Create a PostgreSQL-backed application
pub async fn create_database_app(
    connection_string: impl Into<String>,
) -> Result<AppServices, AppError> {
    AppBuilder::new()
        .with_repository_backend(RepositoryBackend::Database {
            connection_string: connection_string.into(),
        })
        .build()
        .await
}

/// Create application from environment variables
pub async fn create_app_from_env() -> Result<AppServices, AppError> {
    let lookup = |key: &str| std::env::var(key).ok();

    let mut builder =
        AppBuilder::new().with_repository_backend(RepositoryBackend::from_lookup(lookup)?);
    if let Some(message) = lookup("CONTACT_CONFIRMATION_MESSAGE") {
        builder = builder.with_confirmation_message(message);
    }

    builder.build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::services::ContactService;
    use serde_json::json;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[tokio::test]
    async fn test_create_in_memory_app() {
        let app = create_in_memory_app().await.unwrap();

        let receipt = app
            .contact_service
            .submit(&json!({
                "name": "Jane",
                "email": "jane@example.com",
                "message": "Hello there"
            }))
            .await
            .unwrap();
        assert_eq!(receipt.submission.name, "Jane");
    }

    #[tokio::test]
    async fn test_app_builder_confirmation_message() {
        let app = AppBuilder::new()
            .with_confirmation_message("Got it, thanks!")
            .build()
            .await
            .unwrap();

        assert_eq!(app.contact_service.confirmation_message(), "Got it, thanks!");
    }

    #[tokio::test]
    async fn test_local_backend_creates_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested").join("submissions");

        let deps = AppBuilder::new()
            .with_repository_backend(RepositoryBackend::LocalFileSystem { root: root.clone() })
            .build_dependencies()
            .await
            .unwrap();

        assert!(root.is_dir());
        assert_eq!(deps.contact_repository.count().await.unwrap(), 0);
    }

    #[test]
    fn test_backend_from_lookup() {
        assert!(matches!(
            RepositoryBackend::from_lookup(lookup_from(&[])).unwrap(),
            RepositoryBackend::InMemory
        ));

        match RepositoryBackend::from_lookup(lookup_from(&[
            ("REPOSITORY_BACKEND", "s3"),
            ("S3_BUCKET", "contacts"),
            ("S3_ENDPOINT", "http://localhost:9000"),
        ]))
        .unwrap()
        {
            RepositoryBackend::S3(config) => {
                assert_eq!(config.bucket, "contacts");
                assert_eq!(config.region, "us-east-1");
                assert_eq!(config.endpoint.as_deref(), Some("http://localhost:9000"));
            }
            other => panic!("Expected S3 backend, got {:?}", other),
        }

        match RepositoryBackend::from_lookup(lookup_from(&[("REPOSITORY_BACKEND", "local")]))
            .unwrap()
        {
            RepositoryBackend::LocalFileSystem { root } => assert_eq!(root, PathBuf::from("./data")),
            other => panic!("Expected local backend, got {:?}", other),
        }
    }

    #[test]
    fn test_backend_from_lookup_errors() {
        let missing_url = RepositoryBackend::from_lookup(lookup_from(&[(
            "REPOSITORY_BACKEND",
            "database",
        )]));
        assert!(matches!(missing_url, Err(AppError::Configuration { .. })));

        let unknown =
            RepositoryBackend::from_lookup(lookup_from(&[("REPOSITORY_BACKEND", "redis")]));
        assert!(matches!(unknown, Err(AppError::Configuration { .. })));
    }
}
