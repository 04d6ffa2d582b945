use anyhow::{Context, Result};
use clap::Parser;
use item_store_server::{
    adapters::inbound::http::router::{create_router, AppState},
    app::{AppBuilder, AppConfig, MetadataBackend, StorageBackend},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "item-store-server")]
#[command(about = "A REST facade over a metadata table and an object-storage bucket", long_about = None)]
struct Cli {
    /// Server port to listen on
    #[arg(short, long, env = "SERVER_PORT", default_value = "3000")]
    port: u16,

    /// Server host to bind to
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Storage backend type (memory or s3)
    #[arg(long, env = "STORAGE_BACKEND", default_value = "memory")]
    storage_backend: String,

    /// Metadata backend type (memory or dynamodb)
    #[arg(long, env = "METADATA_BACKEND", default_value = "memory")]
    metadata_backend: String,

    /// DynamoDB table name
    #[arg(long, env = "DYNAMODB_TABLE_NAME")]
    table_name: Option<String>,

    /// S3 bucket name
    #[arg(long, env = "S3_BUCKET_NAME")]
    bucket: Option<String>,

    /// AWS region used by both backends
    #[arg(long, env = "AWS_REGION", default_value = "eu-central-1")]
    region: String,

    /// S3 access key (falls back to the SDK credential chain)
    #[arg(long, env = "S3_ACCESS_KEY")]
    s3_access_key: Option<String>,

    /// S3 secret key
    #[arg(long, env = "S3_SECRET_KEY")]
    s3_secret_key: Option<String>,

    /// S3 endpoint URL override (for S3-compatible stores)
    #[arg(long, env = "S3_ENDPOINT")]
    s3_endpoint: Option<String>,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl Cli {
    fn to_app_config(&self) -> Result<AppConfig> {
        let storage_backend = match self.storage_backend.as_str() {
            "memory" => StorageBackend::InMemory {
                public_base_url: format!("http://{}:{}/files", self.host, self.port),
            },
            "s3" => {
                let bucket = self
                    .bucket
                    .clone()
                    .context("S3_BUCKET_NAME is required for the s3 backend")?;

                StorageBackend::S3 {
                    bucket,
                    region: self.region.clone(),
                    access_key: self.s3_access_key.clone(),
                    secret_key: self.s3_secret_key.clone(),
                    endpoint: self.s3_endpoint.clone(),
                }
            }
            _ => anyhow::bail!("Unknown storage backend: {}", self.storage_backend),
        };

        let metadata_backend = match self.metadata_backend.as_str() {
            "memory" => MetadataBackend::InMemory,
            "dynamodb" | "ddb" => {
                let table_name = self
                    .table_name
                    .clone()
                    .context("DYNAMODB_TABLE_NAME is required for the dynamodb backend")?;

                MetadataBackend::DynamoDb {
                    table_name,
                    region: self.region.clone(),
                }
            }
            _ => anyhow::bail!("Unknown metadata backend: {}", self.metadata_backend),
        };

        Ok(AppConfig {
            storage_backend,
            metadata_backend,
        })
    }

    fn init_logging(&self) {
        let level = match self.log_level.to_lowercase().as_str() {
            "trace" => tracing::Level::TRACE,
            "debug" => tracing::Level::DEBUG,
            "warn" => tracing::Level::WARN,
            "error" => tracing::Level::ERROR,
            _ => tracing::Level::INFO,
        };

        tracing_subscriber::fmt().with_max_level(level).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    cli.init_logging();

    info!("Starting Item Store Server");
    info!("Storage backend: {}", cli.storage_backend);
    info!("Metadata backend: {}", cli.metadata_backend);

    let config = cli.to_app_config()?;

    let app_services = AppBuilder::new()
        .with_config(config)
        .build()
        .await
        .context("Failed to build application")?;

    let state = AppState {
        item_service: Arc::new(app_services.item_service),
        file_service: Arc::new(app_services.file_service),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port).parse()?;
    let listener = TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, router)
        .await
        .context("Failed to start server")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "item-store-server",
            "--port",
            "8080",
            "--storage-backend",
            "s3",
            "--bucket",
            "test-bucket",
        ]);

        assert_eq!(cli.port, 8080);
        assert_eq!(cli.storage_backend, "s3");
        assert_eq!(cli.bucket, Some("test-bucket".to_string()));
    }

    #[test]
    fn test_memory_config() {
        let cli = Cli::parse_from(["item-store-server"]);

        let config = cli.to_app_config().unwrap();
        match config.storage_backend {
            StorageBackend::InMemory { .. } => (),
            _ => panic!("Expected InMemory backend"),
        }
    }

    #[test]
    fn test_dynamodb_requires_table_name() {
        let cli = Cli::parse_from(["item-store-server", "--metadata-backend", "dynamodb"]);

        assert!(cli.to_app_config().is_err());
    }
}
