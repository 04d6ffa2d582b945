use chrono::{DateTime, Utc};

use crate::domain::value_objects::ItemId;

/// A metadata record in the table.
///
/// `created_at` is assigned exactly once, at creation, and never changes
/// afterwards; updates may only touch `name` and `size`.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub size: u64,
    pub created_at: DateTime<Utc>,
}

/// Request to create a new item.
///
/// `created_at` may be supplied by the caller; when absent the server assigns
/// the current time.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub id: ItemId,
    pub name: String,
    pub size: u64,
    pub created_at: Option<DateTime<Utc>>,
}

impl NewItem {
    /// Materialize the item, stamping `created_at` when the caller left it out
    pub fn into_item(self, now: DateTime<Utc>) -> Item {
        Item {
            id: self.id,
            name: self.name,
            size: self.size,
            created_at: self.created_at.unwrap_or(now),
        }
    }
}

/// A partial update: only the supplied fields change
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub size: Option<u64>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.size.is_none()
    }
}

/// The attributes an update actually changed, mirrored back to the caller
#[derive(Debug, Clone, PartialEq)]
pub struct UpdatedAttributes {
    pub name: Option<String>,
    pub size: Option<u64>,
}
