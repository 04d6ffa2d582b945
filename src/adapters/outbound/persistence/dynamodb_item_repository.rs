use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;
use chrono::{DateTime, Utc};
use tracing::warn;

use crate::{
    domain::{
        errors::{StoreError, StoreResult},
        models::{Item, ItemPatch, UpdatedAttributes},
        value_objects::ItemId,
    },
    ports::repositories::ItemRepository,
};

/// DynamoDB-backed implementation of ItemRepository.
///
/// The table is keyed by the `Id` string attribute; `name`, `size` and
/// `createdAt` are plain attributes. Writes are unconditional puts, so
/// creating twice with the same id overwrites.
pub struct DynamoDbItemRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbItemRepository {
    /// Create a new repository with the given DynamoDB client and table name
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Get the table name
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl ItemRepository for DynamoDbItemRepository {
    async fn create_item(&self, item: &Item) -> StoreResult<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item_to_attributes(item)))
            .send()
            .await
            .map_err(|err| map_sdk_error("PutItem", err))?;

        Ok(())
    }

    async fn get_all_items(&self) -> StoreResult<Vec<Item>> {
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|err| map_sdk_error("Scan", err))?;

        result
            .items
            .unwrap_or_default()
            .iter()
            .map(attributes_to_item)
            .collect()
    }

    async fn get_item(&self, id: &ItemId) -> StoreResult<Option<Item>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("Id", AttributeValue::S(id.as_str().to_string()))
            .send()
            .await
            .map_err(|err| map_sdk_error("GetItem", err))?;

        match result.item {
            Some(attributes) => Ok(Some(attributes_to_item(&attributes)?)),
            None => Ok(None),
        }
    }

    async fn update_item(
        &self,
        id: &ItemId,
        patch: &ItemPatch,
    ) -> StoreResult<Option<UpdatedAttributes>> {
        // Build a partial SET expression so only the supplied fields change.
        // Both attribute names are aliased; "name" and "size" collide with
        // DynamoDB reserved words.
        let mut set_clauses = Vec::new();
        let mut request = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key("Id", AttributeValue::S(id.as_str().to_string()))
            .condition_expression("attribute_exists(Id)")
            .return_values(ReturnValue::UpdatedNew);

        if let Some(name) = &patch.name {
            set_clauses.push("#name = :name");
            request = request
                .expression_attribute_names("#name", "name")
                .expression_attribute_values(":name", AttributeValue::S(name.clone()));
        }

        if let Some(size) = patch.size {
            set_clauses.push("#size = :size");
            request = request
                .expression_attribute_names("#size", "size")
                .expression_attribute_values(":size", AttributeValue::N(size.to_string()));
        }

        let request = request.update_expression(format!("SET {}", set_clauses.join(", ")));

        match request.send().await {
            Ok(output) => Ok(output.attributes.as_ref().map(attributes_to_updated)),
            Err(err) => match err.into_service_error() {
                // Condition failure means the item is absent, not a backend fault
                UpdateItemError::ConditionalCheckFailedException(_) => Ok(None),
                other => Err(StoreError::backend(format!("UpdateItem failed: {other}"))),
            },
        }
    }

    async fn delete_item(&self, id: &ItemId) -> StoreResult<()> {
        if self.get_item(id).await?.is_none() {
            warn!(%id, "item does not exist, nothing to delete");
            return Ok(());
        }

        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("Id", AttributeValue::S(id.as_str().to_string()))
            .send()
            .await
            .map_err(|err| map_sdk_error("DeleteItem", err))?;

        Ok(())
    }
}

// Attribute conversions, testable without DynamoDB access

fn item_to_attributes(item: &Item) -> HashMap<String, AttributeValue> {
    let mut attributes = HashMap::new();
    attributes.insert(
        "Id".to_string(),
        AttributeValue::S(item.id.as_str().to_string()),
    );
    attributes.insert("name".to_string(), AttributeValue::S(item.name.clone()));
    attributes.insert("size".to_string(), AttributeValue::N(item.size.to_string()));
    attributes.insert(
        "createdAt".to_string(),
        AttributeValue::S(item.created_at.to_rfc3339()),
    );
    attributes
}

fn attributes_to_item(attributes: &HashMap<String, AttributeValue>) -> StoreResult<Item> {
    let id = ItemId::new(get_string(attributes, "Id")?)?;

    Ok(Item {
        id,
        name: get_string(attributes, "name")?,
        size: get_number(attributes, "size")?,
        created_at: get_datetime(attributes, "createdAt")?,
    })
}

fn attributes_to_updated(attributes: &HashMap<String, AttributeValue>) -> UpdatedAttributes {
    UpdatedAttributes {
        name: attributes.get("name").and_then(|v| v.as_s().ok()).cloned(),
        size: attributes
            .get("size")
            .and_then(|v| v.as_n().ok())
            .and_then(|n| n.parse().ok()),
    }
}

fn get_string(attributes: &HashMap<String, AttributeValue>, key: &str) -> StoreResult<String> {
    attributes
        .get(key)
        .and_then(|v| v.as_s().ok())
        .cloned()
        .ok_or_else(|| StoreError::backend(format!("missing or non-string attribute '{key}'")))
}

fn get_number(attributes: &HashMap<String, AttributeValue>, key: &str) -> StoreResult<u64> {
    attributes
        .get(key)
        .and_then(|v| v.as_n().ok())
        .and_then(|n| n.parse().ok())
        .ok_or_else(|| StoreError::backend(format!("missing or non-numeric attribute '{key}'")))
}

fn get_datetime(
    attributes: &HashMap<String, AttributeValue>,
    key: &str,
) -> StoreResult<DateTime<Utc>> {
    let raw = get_string(attributes, key)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|err| StoreError::backend(format!("invalid timestamp in attribute '{key}': {err}")))
}

fn map_sdk_error<E, R>(operation: &'static str, err: SdkError<E, R>) -> StoreError
where
    E: std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug + Send + Sync + 'static,
{
    StoreError::backend(format!(
        "{operation} failed: {}",
        DisplayErrorContext(err)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> Item {
        Item {
            id: ItemId::new("report.txt".to_string()).unwrap(),
            name: "report.txt".to_string(),
            size: 42,
            created_at: "2024-01-15T10:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_item_round_trips_through_attributes() {
        let item = sample_item();
        let attributes = item_to_attributes(&item);
        let decoded = attributes_to_item(&attributes).unwrap();

        assert_eq!(decoded, item);
    }

    #[test]
    fn test_attributes_to_item_rejects_missing_field() {
        let mut attributes = item_to_attributes(&sample_item());
        attributes.remove("size");

        assert!(attributes_to_item(&attributes).is_err());
    }

    #[test]
    fn test_updated_attributes_only_reflect_returned_fields() {
        let mut attributes = HashMap::new();
        attributes.insert("size".to_string(), AttributeValue::N("7".to_string()));

        let updated = attributes_to_updated(&attributes);
        assert_eq!(updated.size, Some(7));
        assert_eq!(updated.name, None);
    }
}
