pub mod repositories;
pub mod services;
pub mod storage;

// Re-export all port traits for convenience
pub use repositories::ItemRepository;
pub use services::{FileService, ItemService};
pub use storage::ObjectStore;
