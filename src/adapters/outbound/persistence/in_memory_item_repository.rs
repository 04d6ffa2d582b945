use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

use crate::{
    domain::{
        errors::StoreResult,
        models::{Item, ItemPatch, UpdatedAttributes},
        value_objects::ItemId,
    },
    ports::repositories::ItemRepository,
};

/// In-memory implementation of ItemRepository for testing and development
#[derive(Clone, Default)]
pub struct InMemoryItemRepository {
    items: Arc<RwLock<HashMap<String, Item>>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create_item(&self, item: &Item) -> StoreResult<()> {
        let mut items = self.items.write().await;
        items.insert(item.id.as_str().to_string(), item.clone());
        Ok(())
    }

    async fn get_all_items(&self) -> StoreResult<Vec<Item>> {
        let items = self.items.read().await;
        Ok(items.values().cloned().collect())
    }

    async fn get_item(&self, id: &ItemId) -> StoreResult<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.get(id.as_str()).cloned())
    }

    async fn update_item(
        &self,
        id: &ItemId,
        patch: &ItemPatch,
    ) -> StoreResult<Option<UpdatedAttributes>> {
        let mut items = self.items.write().await;

        let Some(item) = items.get_mut(id.as_str()) else {
            return Ok(None);
        };

        if let Some(name) = &patch.name {
            item.name = name.clone();
        }
        if let Some(size) = patch.size {
            item.size = size;
        }

        Ok(Some(UpdatedAttributes {
            name: patch.name.clone(),
            size: patch.size,
        }))
    }

    async fn delete_item(&self, id: &ItemId) -> StoreResult<()> {
        let mut items = self.items.write().await;

        if items.remove(id.as_str()).is_none() {
            warn!(%id, "item does not exist, nothing to delete");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn item(id: &str, name: &str, size: u64) -> Item {
        Item {
            id: ItemId::new(id.to_string()).unwrap(),
            name: name.to_string(),
            size,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_overwrites_existing_id() {
        let repo = InMemoryItemRepository::new();
        repo.create_item(&item("1", "first", 1)).await.unwrap();
        repo.create_item(&item("1", "second", 2)).await.unwrap();

        let all = repo.get_all_items().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "second");
    }

    #[tokio::test]
    async fn test_update_returns_only_changed_attributes() {
        let repo = InMemoryItemRepository::new();
        let id = ItemId::new("1".to_string()).unwrap();
        repo.create_item(&item("1", "first", 1)).await.unwrap();

        let updated = repo
            .update_item(
                &id,
                &ItemPatch {
                    name: Some("renamed".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name.as_deref(), Some("renamed"));
        assert_eq!(updated.size, None);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = InMemoryItemRepository::new();
        let id = ItemId::new("missing".to_string()).unwrap();

        assert!(repo.delete_item(&id).await.is_ok());
        assert!(repo.delete_item(&id).await.is_ok());
    }
}
