use crate::domain::{
    errors::StoreResult,
    models::{FileEntry, FileUpload},
    value_objects::ObjectKey,
};
use async_trait::async_trait;

/// Service port for file operations against the bucket.
///
/// Implementations also own the dual-write coordination: uploads and deletes
/// mirror a metadata record through the item repository, best-effort.
#[async_trait]
pub trait FileService: Send + Sync + 'static {
    /// Store the object and mirror a metadata record for it.
    /// Returns the key the object was stored under.
    async fn upload_file(&self, upload: FileUpload) -> StoreResult<ObjectKey>;

    /// Resolve a download URL for an existing object;
    /// fails with a not-found error when the object is absent
    async fn get_file_url(&self, key: &ObjectKey) -> StoreResult<String>;

    /// List every stored object together with a resolved URL
    async fn get_all_files(&self) -> StoreResult<Vec<FileEntry>>;

    /// Delete the object and its mirrored metadata record;
    /// fails with a not-found error when the object is absent
    async fn delete_file(&self, key: &ObjectKey) -> StoreResult<()>;
}
