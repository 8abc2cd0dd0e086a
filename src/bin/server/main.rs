use anyhow::{Context, Result};
use clap::Parser;
use portfolio_server::{
    adapters::inbound::http::router::{RouterOptions, create_router_with_options},
    app::{AppBuilder, AppConfig, RepositoryBackend},
};
use std::{net::SocketAddr, path::PathBuf};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "portfolio-server")]
#[command(about = "Serves the portfolio site and records contact form submissions", long_about = None)]
struct Cli {
    /// Server port to listen on
    #[arg(short, long, env = "SERVER_PORT", default_value = "3000")]
    port: u16,

    /// Server host to bind to
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Repository backend type (memory, local, s3, database)
    #[arg(long, env = "REPOSITORY_BACKEND", default_value = "memory")]
    repository_backend: String,

    /// Directory for the local filesystem backend
    #[arg(long, env = "DATA_DIR", default_value = "./data")]
    data_dir: PathBuf,

    /// S3 endpoint URL (for S3-compatible services)
    #[arg(long, env = "S3_ENDPOINT")]
    s3_endpoint: Option<String>,

    /// S3 bucket name
    #[arg(long, env = "S3_BUCKET")]
    s3_bucket: Option<String>,

    /// S3 region
    #[arg(long, env = "S3_REGION", default_value = "us-east-1")]
    s3_region: String,

    /// S3 access key
    #[arg(long, env = "S3_ACCESS_KEY")]
    s3_access_key: Option<String>,

    /// S3 secret key
    #[arg(long, env = "S3_SECRET_KEY")]
    s3_secret_key: Option<String>,

    /// Database URL for repository backend (PostgreSQL)
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Directory with the built site to serve next to the API
    #[arg(long, env = "STATIC_DIR")]
    static_dir: Option<PathBuf>,

    /// Origins allowed to call the API cross-origin, comma separated
    #[arg(long, env = "ALLOWED_ORIGINS", value_delimiter = ',')]
    allowed_origins: Vec<String>,

    /// Message shown to visitors after a successful submission
    #[arg(long, env = "CONTACT_CONFIRMATION_MESSAGE")]
    confirmation_message: Option<String>,

    /// Log level, overridden by RUST_LOG
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl Cli {
    /// Parsed setting for an environment key, after clap applied flags,
    /// env fallbacks and defaults
    fn setting(&self, key: &str) -> Option<String> {
        match key {
            "REPOSITORY_BACKEND" => Some(self.repository_backend.clone()),
            "DATA_DIR" => Some(self.data_dir.to_string_lossy().into_owned()),
            "S3_BUCKET" => self.s3_bucket.clone(),
            "S3_REGION" => Some(self.s3_region.clone()),
            "S3_ACCESS_KEY" => self.s3_access_key.clone(),
            "S3_SECRET_KEY" => self.s3_secret_key.clone(),
            "S3_ENDPOINT" => self.s3_endpoint.clone(),
            "DATABASE_URL" => self.database_url.clone(),
            _ => None,
        }
    }

    fn to_app_config(&self) -> Result<AppConfig> {
        let repository_backend = RepositoryBackend::from_lookup(|key| self.setting(key))?;

        Ok(AppConfig {
            repository_backend,
            confirmation_message: self.confirmation_message.clone(),
        })
    }

    fn router_options(&self) -> RouterOptions {
        RouterOptions {
            static_dir: self.static_dir.clone(),
            allowed_origins: self
                .allowed_origins
                .iter()
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),
        }
    }

    fn init_logging(&self) -> Result<()> {
        let level = match self.log_level.to_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "info" => "info",
            "warn" => "warn",
            "error" => "error",
            _ => "info",
        };

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("{},tower_http=debug", level)));

        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .context("Failed to initialize logging")?;

        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging()?;

    info!("Starting portfolio server");
    info!("Repository backend: {}", cli.repository_backend);

    // Create app configuration
    let config = cli.to_app_config()?;

    // Build the application
    let app_services = AppBuilder::new()
        .with_config(config)
        .build()
        .await
        .context("Failed to build application")?;

    // Create the router
    let options = cli.router_options();
    if let Some(dir) = &options.static_dir {
        info!("Serving static site from {}", dir.display());
    }
    let router = create_router_with_options(app_services.into_state(), &options)
        .context("Invalid ALLOWED_ORIGINS entry")?;

    // Bind to address
    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port).parse()?;
    let listener = TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);

    // Start the server
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Failed to start server")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "portfolio-server",
            "--port",
            "8080",
            "--repository-backend",
            "s3",
            "--s3-bucket",
            "contact-inbox",
            "--allowed-origins",
            "https://a.example.com, https://b.example.com",
        ]);

        assert_eq!(cli.port, 8080);
        assert_eq!(cli.repository_backend, "s3");
        assert_eq!(cli.s3_bucket, Some("contact-inbox".to_string()));
        assert_eq!(
            cli.router_options().allowed_origins,
            vec!["https://a.example.com", "https://b.example.com"]
        );

        match cli.to_app_config().unwrap().repository_backend {
            RepositoryBackend::S3(config) => assert_eq!(config.bucket, "contact-inbox"),
            _ => panic!("Expected S3 backend"),
        }
    }

    #[test]
    fn test_memory_config() {
        let cli = Cli::parse_from(["portfolio-server", "--repository-backend", "memory"]);

        let config = cli.to_app_config().unwrap();
        match config.repository_backend {
            RepositoryBackend::InMemory => (),
            _ => panic!("Expected InMemory backend"),
        }
    }

    #[test]
    fn test_local_config_uses_data_dir() {
        let cli = Cli::parse_from([
            "portfolio-server",
            "--repository-backend",
            "local",
            "--data-dir",
            "/var/lib/portfolio",
        ]);

        match cli.to_app_config().unwrap().repository_backend {
            RepositoryBackend::LocalFileSystem { root } => {
                assert_eq!(root, PathBuf::from("/var/lib/portfolio"))
            }
            _ => panic!("Expected local backend"),
        }
    }

    #[test]
    fn test_database_backend_requires_url() {
        let mut cli = Cli::parse_from(["portfolio-server", "--repository-backend", "database"]);
        cli.database_url = None;

        assert!(cli.to_app_config().is_err());

        cli.database_url = Some("postgres://localhost/portfolio".to_string());
        match cli.to_app_config().unwrap().repository_backend {
            RepositoryBackend::Database { connection_string } => {
                assert_eq!(connection_string, "postgres://localhost/portfolio")
            }
            _ => panic!("Expected database backend"),
        }
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        let cli = Cli::parse_from(["portfolio-server", "--repository-backend", "redis"]);
        assert!(cli.to_app_config().is_err());
    }
}
