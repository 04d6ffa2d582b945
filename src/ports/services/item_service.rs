use crate::domain::{
    errors::StoreResult,
    models::{Item, ItemPatch, NewItem, UpdatedAttributes},
    value_objects::ItemId,
};
use async_trait::async_trait;

/// Service port for item CRUD against the metadata table
#[async_trait]
pub trait ItemService: Send + Sync + 'static {
    /// Create an item, stamping `created_at` when the caller left it out
    async fn create_item(&self, new_item: NewItem) -> StoreResult<Item>;

    /// Return every item, unordered
    async fn get_all_items(&self) -> StoreResult<Vec<Item>>;

    /// Return the item, or `None` when absent
    async fn get_item(&self, id: &ItemId) -> StoreResult<Option<Item>>;

    /// Apply a partial update; rejects an empty patch with a validation error.
    /// Returns the updated attributes, or `None` when the item is absent.
    async fn update_item(
        &self,
        id: &ItemId,
        patch: ItemPatch,
    ) -> StoreResult<Option<UpdatedAttributes>>;

    /// Delete an item; deleting an absent id succeeds
    async fn delete_item(&self, id: &ItemId) -> StoreResult<()>;
}
