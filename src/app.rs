use object_store::memory::InMemory;
use std::sync::Arc;

use crate::{
    adapters::outbound::{
        persistence::{DynamoDbItemRepository, InMemoryItemRepository},
        storage::{create_s3_store, BucketStoreAdapter, S3Config},
    },
    domain::value_objects::BucketName,
    ports::{repositories::ItemRepository, storage::ObjectStore},
    services::{FileServiceImpl, ItemServiceImpl},
};

/// Configuration for the application, read once at startup and injected
/// explicitly; nothing here is picked up from ambient globals later.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage_backend: StorageBackend,
    pub metadata_backend: MetadataBackend,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_backend: StorageBackend::InMemory {
                public_base_url: "http://localhost:3000/files".to_string(),
            },
            metadata_backend: MetadataBackend::InMemory,
        }
    }
}

/// Storage backend configuration
#[derive(Debug, Clone)]
pub enum StorageBackend {
    InMemory {
        /// Base for the deterministic URLs the dev backend hands out
        public_base_url: String,
    },
    S3 {
        bucket: String,
        region: String,
        access_key: Option<String>,
        secret_key: Option<String>,
        endpoint: Option<String>,
    },
}

/// Metadata table backend configuration
#[derive(Debug, Clone)]
pub enum MetadataBackend {
    InMemory,
    DynamoDb { table_name: String, region: String },
}

/// Application dependencies container
pub struct AppDependencies {
    pub object_store: Arc<dyn ObjectStore>,
    pub item_repository: Arc<dyn ItemRepository>,
}

/// Application services container
pub struct AppServices {
    pub item_service: ItemServiceImpl,
    pub file_service: FileServiceImpl,
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

    /// Configure storage backend
    pub fn with_storage_backend(mut self, backend: StorageBackend) -> Self {
        self.config.storage_backend = backend;
        self
    }

    /// Configure metadata backend
    pub fn with_metadata_backend(mut self, backend: MetadataBackend) -> Self {
        self.config.metadata_backend = backend;
        self
    }

    /// Build the application dependencies
    pub async fn build_dependencies(self) -> Result<AppDependencies, AppError> {
        let object_store = self.create_object_store()?;
        let item_repository = self.create_item_repository().await?;

        Ok(AppDependencies {
            object_store,
            item_repository,
        })
    }

    /// Build the complete application with services
    pub async fn build(self) -> Result<AppServices, AppError> {
        let deps = self.build_dependencies().await?;

        let item_service = ItemServiceImpl::new(deps.item_repository.clone());
        let file_service =
            FileServiceImpl::new(deps.object_store.clone(), deps.item_repository.clone());

        Ok(AppServices {
            item_service,
            file_service,
        })
    }

    /// Create the storage adapter based on configuration
    fn create_object_store(&self) -> Result<Arc<dyn ObjectStore>, AppError> {
        match &self.config.storage_backend {
            StorageBackend::InMemory { public_base_url } => {
                let store = Arc::new(InMemory::new());
                let adapter =
                    BucketStoreAdapter::new(store).with_public_base_url(public_base_url.clone());
                Ok(Arc::new(adapter))
            }
            StorageBackend::S3 {
                bucket,
                region,
                access_key,
                secret_key,
                endpoint,
            } => {
                let bucket =
                    BucketName::new(bucket.clone()).map_err(|err| AppError::Configuration {
                        message: err.to_string(),
                    })?;
                let s3 = create_s3_store(&S3Config {
                    bucket,
                    region: region.clone(),
                    access_key: access_key.clone(),
                    secret_key: secret_key.clone(),
                    endpoint: endpoint.clone(),
                })
                .map_err(|err| AppError::StorageInit {
                    message: err.to_string(),
                })?;

                // The concrete AmazonS3 store doubles as the presigned-URL signer
                let adapter = BucketStoreAdapter::new(s3.clone()).with_signer(s3);
                Ok(Arc::new(adapter))
            }
        }
    }

    /// Create the item repository based on configuration
    async fn create_item_repository(&self) -> Result<Arc<dyn ItemRepository>, AppError> {
        match &self.config.metadata_backend {
            MetadataBackend::InMemory => Ok(Arc::new(InMemoryItemRepository::new())),
            MetadataBackend::DynamoDb { table_name, region } => {
                let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
                    .region(aws_config::Region::new(region.clone()))
                    .load()
                    .await;
                let client = aws_sdk_dynamodb::Client::new(&sdk_config);

                Ok(Arc::new(DynamoDbItemRepository::new(
                    client,
                    table_name.clone(),
                )))
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
}

/// Create an in-memory application for testing and development
pub async fn create_in_memory_app() -> Result<AppServices, AppError> {
    AppBuilder::new().build().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_in_memory_app() {
        assert!(create_in_memory_app().await.is_ok());
    }

    #[tokio::test]
    async fn test_dependencies_creation() {
        assert!(AppBuilder::new().build_dependencies().await.is_ok());
    }
}
