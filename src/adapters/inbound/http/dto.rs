use chrono::{DateTime, Utc};
use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::domain::{
    errors::{StoreError, ValidationError},
    models::{FileEntry, Item, ItemPatch, NewItem, UpdatedAttributes},
    value_objects::ItemId,
};

/// Request body for item creation; serde enforces the field types
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItemDto {
    #[serde(rename = "Id")]
    pub id: String,
    pub name: String,
    pub size: u64,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request body for item updates.
///
/// `createdAt` is deserialized only so the attempt to set it can be rejected
/// with a validation error instead of being silently ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateItemDto {
    pub name: Option<String>,
    pub size: Option<u64>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<serde_json::Value>,
}

/// Response body for a single item; field names match the wire format
#[derive(Debug, Clone, Serialize)]
pub struct ItemDto {
    #[serde(rename = "Id")]
    pub id: String,
    pub name: String,
    pub size: u64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// The attributes an update changed; untouched fields are omitted
#[derive(Debug, Clone, Serialize)]
pub struct UpdatedAttributesDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// Generic acknowledgment body
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponseDto {
    pub message: String,
}

/// Response body for a successful update
#[derive(Debug, Clone, Serialize)]
pub struct UpdateResponseDto {
    pub message: String,
    #[serde(rename = "updatedAttributes")]
    pub updated_attributes: UpdatedAttributesDto,
}

/// Response body for a successful upload
#[derive(Debug, Clone, Serialize)]
pub struct UploadResponseDto {
    pub message: String,
    pub key: String,
}

/// One listed file with its resolved URL
#[derive(Debug, Clone, Serialize)]
pub struct FileEntryDto {
    pub key: String,
    pub url: String,
}

/// Response body carrying a single resolved URL
#[derive(Debug, Clone, Serialize)]
pub struct FileUrlDto {
    pub url: String,
}

/// Error envelope returned for every failure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponseDto {
    pub error: String,
}

impl MessageResponseDto {
    pub fn new(message: &str) -> Self {
        MessageResponseDto {
            message: message.to_string(),
        }
    }
}

impl ErrorResponseDto {
    pub fn new(message: &str) -> Self {
        ErrorResponseDto {
            error: message.to_string(),
        }
    }
}

// Conversion implementations

impl TryFrom<CreateItemDto> for NewItem {
    type Error = ValidationError;

    fn try_from(dto: CreateItemDto) -> Result<Self, Self::Error> {
        Ok(NewItem {
            id: ItemId::new(dto.id)?,
            name: dto.name,
            size: dto.size,
            created_at: dto.created_at,
        })
    }
}

impl TryFrom<UpdateItemDto> for ItemPatch {
    type Error = ValidationError;

    fn try_from(dto: UpdateItemDto) -> Result<Self, Self::Error> {
        if dto.created_at.is_some() {
            return Err(ValidationError::ImmutableCreatedAt);
        }

        Ok(ItemPatch {
            name: dto.name,
            size: dto.size,
        })
    }
}

impl From<Item> for ItemDto {
    fn from(item: Item) -> Self {
        ItemDto {
            id: item.id.as_str().to_string(),
            name: item.name,
            size: item.size,
            created_at: item.created_at,
        }
    }
}

impl From<UpdatedAttributes> for UpdatedAttributesDto {
    fn from(attrs: UpdatedAttributes) -> Self {
        UpdatedAttributesDto {
            name: attrs.name,
            size: attrs.size,
        }
    }
}

impl From<FileEntry> for FileEntryDto {
    fn from(entry: FileEntry) -> Self {
        FileEntryDto {
            key: entry.key.into_string(),
            url: entry.url,
        }
    }
}

impl From<&StoreError> for StatusCode {
    fn from(err: &StoreError) -> Self {
        match err {
            StoreError::Validation(_) => StatusCode::BAD_REQUEST,
            StoreError::FileNotFound { .. } => StatusCode::NOT_FOUND,
            StoreError::Backend { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
