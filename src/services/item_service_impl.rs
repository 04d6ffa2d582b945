use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use crate::{
    domain::{
        errors::{StoreResult, ValidationError},
        models::{Item, ItemPatch, NewItem, UpdatedAttributes},
        value_objects::ItemId,
    },
    ports::{repositories::ItemRepository, services::ItemService},
};

/// Implementation of ItemService on top of the metadata table
#[derive(Clone)]
pub struct ItemServiceImpl {
    repository: Arc<dyn ItemRepository>,
}

impl ItemServiceImpl {
    pub fn new(repository: Arc<dyn ItemRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ItemService for ItemServiceImpl {
    async fn create_item(&self, new_item: NewItem) -> StoreResult<Item> {
        let item = new_item.into_item(Utc::now());
        self.repository.create_item(&item).await?;

        info!(id = %item.id, name = %item.name, size = item.size, "item created");
        Ok(item)
    }

    async fn get_all_items(&self) -> StoreResult<Vec<Item>> {
        let items = self.repository.get_all_items().await?;
        info!(count = items.len(), "retrieved all items");
        Ok(items)
    }

    async fn get_item(&self, id: &ItemId) -> StoreResult<Option<Item>> {
        let item = self.repository.get_item(id).await?;
        info!(%id, found = item.is_some(), "retrieved item");
        Ok(item)
    }

    async fn update_item(
        &self,
        id: &ItemId,
        patch: ItemPatch,
    ) -> StoreResult<Option<UpdatedAttributes>> {
        if patch.is_empty() {
            return Err(ValidationError::EmptyUpdate.into());
        }

        let updated = self.repository.update_item(id, &patch).await?;
        match &updated {
            Some(attrs) => info!(%id, ?attrs, "item updated"),
            None => warn!(%id, "update targeted a missing item"),
        }
        Ok(updated)
    }

    async fn delete_item(&self, id: &ItemId) -> StoreResult<()> {
        self.repository.delete_item(id).await?;
        info!(%id, "item deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::persistence::InMemoryItemRepository;

    fn service() -> ItemServiceImpl {
        ItemServiceImpl::new(Arc::new(InMemoryItemRepository::new()))
    }

    fn new_item(id: &str, name: &str, size: u64) -> NewItem {
        NewItem {
            id: ItemId::new(id.to_string()).unwrap(),
            name: name.to_string(),
            size,
            created_at: None,
        }
    }

    #[tokio::test]
    async fn test_create_then_get_round_trips() {
        let service = service();
        let created = service.create_item(new_item("1", "Item 1", 10)).await.unwrap();

        let fetched = service
            .get_item(&ItemId::new("1".to_string()).unwrap())
            .await
            .unwrap()
            .expect("item should exist");

        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "Item 1");
        assert_eq!(fetched.size, 10);
    }

    #[tokio::test]
    async fn test_empty_update_is_rejected() {
        let service = service();
        service.create_item(new_item("1", "Item 1", 10)).await.unwrap();

        let err = service
            .update_item(&ItemId::new("1".to_string()).unwrap(), ItemPatch::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            crate::domain::StoreError::Validation(ValidationError::EmptyUpdate)
        ));
    }

    #[tokio::test]
    async fn test_partial_update_leaves_other_fields() {
        let service = service();
        let id = ItemId::new("1".to_string()).unwrap();
        let created = service.create_item(new_item("1", "Item 1", 10)).await.unwrap();

        let updated = service
            .update_item(
                &id,
                ItemPatch {
                    size: Some(99),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .expect("item should exist");

        assert_eq!(updated.size, Some(99));
        assert_eq!(updated.name, None);

        let fetched = service.get_item(&id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Item 1");
        assert_eq!(fetched.size, 99);
        assert_eq!(fetched.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_delete_missing_item_succeeds() {
        let service = service();
        let id = ItemId::new("ghost".to_string()).unwrap();

        assert!(service.delete_item(&id).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_missing_item_returns_none() {
        let service = service();
        let id = ItemId::new("ghost".to_string()).unwrap();

        let updated = service
            .update_item(
                &id,
                ItemPatch {
                    name: Some("new".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(updated.is_none());
    }
}
