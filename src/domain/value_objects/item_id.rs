use crate::domain::{errors::ValidationError, value_objects::ObjectKey};

/// A validated item identifier, the primary key of the metadata table.
///
/// The constraints match [`ObjectKey`] so a stored object's key can always
/// serve as the id of its mirrored metadata record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemId(String);

impl ItemId {
    /// Create a new ItemId with validation
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::EmptyItemId);
        }

        if value.len() > 1024 {
            return Err(ValidationError::ItemIdTooLong {
                actual: value.len(),
                max: 1024,
            });
        }

        if value.contains('\0') {
            return Err(ValidationError::InvalidItemIdCharacter('\0'));
        }

        Ok(Self(value))
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&ObjectKey> for ItemId {
    fn from(key: &ObjectKey) -> Self {
        // ObjectKey enforces a superset of the ItemId rules
        ItemId(key.as_str().to_string())
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_item_id() {
        assert!(ItemId::new("1".to_string()).is_ok());
        assert!(ItemId::new("report-2024.pdf".to_string()).is_ok());
    }

    #[test]
    fn test_invalid_item_id() {
        assert!(ItemId::new("".to_string()).is_err());
        assert!(ItemId::new("null\0byte".to_string()).is_err());
        assert!(ItemId::new("x".repeat(1025)).is_err());
    }

    #[test]
    fn test_item_id_from_object_key() {
        let key = ObjectKey::new("photos/cat.png".to_string()).unwrap();
        let id = ItemId::from(&key);
        assert_eq!(id.as_str(), key.as_str());
    }
}
