pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export key types for convenience

// Domain types - core business entities and value objects
pub use domain::{
    // Value objects
    BucketName,
    FileEntry,
    FileUpload,
    // Models
    Item,
    ItemId,
    ItemPatch,
    NewItem,
    ObjectKey,
    // Errors
    StoreError,
    StoreResult,
    UpdatedAttributes,
    ValidationError,
};

// Port types - interfaces for external systems
pub use ports::{FileService, ItemRepository, ItemService, ObjectStore};

// Service implementations - business logic
pub use services::{FileServiceImpl, ItemServiceImpl};

// Application factory and configuration
pub use app::{
    create_in_memory_app, AppBuilder, AppConfig, AppDependencies, AppError, AppServices,
    MetadataBackend, StorageBackend,
};

// Adapter types - infrastructure implementations
pub use adapters::outbound::{
    persistence::{DynamoDbItemRepository, InMemoryItemRepository},
    storage::BucketStoreAdapter,
};

// Public facade for easy construction
pub mod prelude {
    pub use crate::{
        create_in_memory_app, AppBuilder, AppServices, BucketName, BucketStoreAdapter,
        FileService, FileServiceImpl, InMemoryItemRepository, Item, ItemId, ItemRepository,
        ItemService, ItemServiceImpl, ObjectKey, ObjectStore,
    };
}
