use crate::domain::{
    errors::StoreResult,
    models::{Item, ItemPatch, UpdatedAttributes},
    value_objects::ItemId,
};
use async_trait::async_trait;

/// Port for the metadata table.
/// This abstracts the actual table backend (DynamoDB, in-memory, etc.)
#[async_trait]
pub trait ItemRepository: Send + Sync + 'static {
    /// Write an item unconditionally (overwrite semantics, no uniqueness check)
    async fn create_item(&self, item: &Item) -> StoreResult<()>;

    /// Return every record in the table, unordered
    async fn get_all_items(&self) -> StoreResult<Vec<Item>>;

    /// Return the record, or `None` when absent
    async fn get_item(&self, id: &ItemId) -> StoreResult<Option<Item>>;

    /// Apply a partial update; only the supplied fields change.
    /// Returns the updated attributes, or `None` when the item is absent.
    async fn update_item(
        &self,
        id: &ItemId,
        patch: &ItemPatch,
    ) -> StoreResult<Option<UpdatedAttributes>>;

    /// Delete a record. Idempotent: deleting an absent id succeeds.
    async fn delete_item(&self, id: &ItemId) -> StoreResult<()>;
}
