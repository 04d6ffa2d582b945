mod dynamodb_item_repository;
mod in_memory_item_repository;

pub use dynamodb_item_repository::DynamoDbItemRepository;
pub use in_memory_item_repository::InMemoryItemRepository;
