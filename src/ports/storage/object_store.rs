use std::time::Duration;

use crate::domain::{errors::StoreResult, value_objects::ObjectKey};
use async_trait::async_trait;
use bytes::Bytes;

/// Port for the object-storage bucket.
/// This abstracts the actual storage backend (S3, in-memory, etc.)
#[async_trait]
pub trait ObjectStore: Send + Sync + 'static {
    /// Store object data, overwriting any object already at the key
    async fn put_object(
        &self,
        key: &ObjectKey,
        data: Bytes,
        content_type: Option<&str>,
    ) -> StoreResult<()>;

    /// Lightweight existence probe (HEAD, no data transfer)
    async fn object_exists(&self, key: &ObjectKey) -> StoreResult<bool>;

    /// List every key in the bucket, unordered
    async fn list_keys(&self) -> StoreResult<Vec<ObjectKey>>;

    /// Delete object data
    async fn delete_object(&self, key: &ObjectKey) -> StoreResult<()>;

    /// Resolve a URL the object can be fetched from.
    /// Backends that can sign requests return a presigned URL valid for
    /// `expires_in`; the in-memory dev backend returns a deterministic
    /// public-style URL instead.
    async fn get_url(&self, key: &ObjectKey, expires_in: Duration) -> StoreResult<String>;
}
