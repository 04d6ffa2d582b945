use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::{
    domain::{
        errors::{StoreError, StoreResult},
        models::{FileEntry, FileUpload, Item},
        value_objects::{ItemId, ObjectKey},
    },
    ports::{repositories::ItemRepository, services::FileService, storage::ObjectStore},
};

/// How long issued download URLs stay valid
const URL_EXPIRY: Duration = Duration::from_secs(3600);

/// Implementation of FileService on top of the bucket.
///
/// Uploads and deletes run a two-step sequence: the object write/delete,
/// then the mirrored metadata record write/delete. The second step is
/// best-effort; a failure leaves an orphan, which is logged for later
/// repair and never rolled back.
#[derive(Clone)]
pub struct FileServiceImpl {
    store: Arc<dyn ObjectStore>,
    repository: Arc<dyn ItemRepository>,
}

impl FileServiceImpl {
    pub fn new(store: Arc<dyn ObjectStore>, repository: Arc<dyn ItemRepository>) -> Self {
        Self { store, repository }
    }
}

#[async_trait]
impl FileService for FileServiceImpl {
    async fn upload_file(&self, upload: FileUpload) -> StoreResult<ObjectKey> {
        let FileUpload {
            key,
            data,
            content_type,
        } = upload;
        let size = data.len() as u64;

        self.store
            .put_object(&key, data, content_type.as_deref())
            .await?;
        info!(%key, size, "file uploaded");

        let record = Item {
            id: ItemId::from(&key),
            name: key.as_str().to_string(),
            size,
            created_at: Utc::now(),
        };
        if let Err(err) = self.repository.create_item(&record).await {
            warn!(%key, error = %err, "orphaned object: metadata record write failed");
        }

        Ok(key)
    }

    async fn get_file_url(&self, key: &ObjectKey) -> StoreResult<String> {
        if !self.store.object_exists(key).await? {
            return Err(StoreError::FileNotFound { key: key.clone() });
        }

        self.store.get_url(key, URL_EXPIRY).await
    }

    async fn get_all_files(&self) -> StoreResult<Vec<FileEntry>> {
        let keys = self.store.list_keys().await?;

        // Resolve URLs concurrently; a key whose resolution fails is skipped
        // rather than failing the whole listing.
        let resolved = futures::future::join_all(keys.into_iter().map(|key| async move {
            match self.store.get_url(&key, URL_EXPIRY).await {
                Ok(url) => Some(FileEntry { key, url }),
                Err(err) => {
                    warn!(%key, error = %err, "skipping file with unresolvable url");
                    None
                }
            }
        }))
        .await;

        Ok(resolved.into_iter().flatten().collect())
    }

    async fn delete_file(&self, key: &ObjectKey) -> StoreResult<()> {
        if !self.store.object_exists(key).await? {
            return Err(StoreError::FileNotFound { key: key.clone() });
        }

        self.store.delete_object(key).await?;
        info!(%key, "file deleted");

        if let Err(err) = self.repository.delete_item(&ItemId::from(key)).await {
            warn!(%key, error = %err, "orphaned metadata record: record delete failed");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::{
        persistence::InMemoryItemRepository, storage::BucketStoreAdapter,
    };
    use bytes::Bytes;
    use object_store::memory::InMemory;

    fn setup() -> (FileServiceImpl, Arc<InMemoryItemRepository>) {
        let repository = Arc::new(InMemoryItemRepository::new());
        let store = Arc::new(
            BucketStoreAdapter::new(Arc::new(InMemory::new()))
                .with_public_base_url("http://localhost:3000/files"),
        );
        (
            FileServiceImpl::new(store, repository.clone()),
            repository,
        )
    }

    fn upload(key: &str, data: &'static [u8]) -> FileUpload {
        FileUpload {
            key: ObjectKey::new(key.to_string()).unwrap(),
            data: Bytes::from_static(data),
            content_type: Some("text/plain".to_string()),
        }
    }

    #[tokio::test]
    async fn test_upload_then_url_contains_key() {
        let (service, _) = setup();
        let key = service.upload_file(upload("report.txt", b"hello")).await.unwrap();

        let url = service.get_file_url(&key).await.unwrap();
        assert!(url.contains("report.txt"));
    }

    #[tokio::test]
    async fn test_upload_mirrors_metadata_record() {
        let (service, repository) = setup();
        let key = service.upload_file(upload("report.txt", b"hello")).await.unwrap();

        let record = repository
            .get_item(&ItemId::from(&key))
            .await
            .unwrap()
            .expect("mirrored record should exist");

        assert_eq!(record.name, "report.txt");
        assert_eq!(record.size, 5);
    }

    #[tokio::test]
    async fn test_url_for_missing_file_fails() {
        let (service, _) = setup();
        let key = ObjectKey::new("ghost.txt".to_string()).unwrap();

        let err = service.get_file_url(&key).await.unwrap_err();
        assert!(matches!(err, StoreError::FileNotFound { .. }));
        assert_eq!(err.to_string(), "File does not exist.");
    }

    #[tokio::test]
    async fn test_delete_removes_object_and_record() {
        let (service, repository) = setup();
        let key = service.upload_file(upload("report.txt", b"hello")).await.unwrap();

        service.delete_file(&key).await.unwrap();

        let err = service.get_file_url(&key).await.unwrap_err();
        assert!(matches!(err, StoreError::FileNotFound { .. }));
        assert!(repository
            .get_item(&ItemId::from(&key))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_file_fails() {
        let (service, _) = setup();
        let key = ObjectKey::new("ghost.txt".to_string()).unwrap();

        let err = service.delete_file(&key).await.unwrap_err();
        assert!(matches!(err, StoreError::FileNotFound { .. }));
    }

    #[tokio::test]
    async fn test_listing_includes_both_uploads() {
        let (service, _) = setup();
        service.upload_file(upload("a.txt", b"aa")).await.unwrap();
        service.upload_file(upload("b.txt", b"bb")).await.unwrap();

        let entries = service.get_all_files().await.unwrap();
        assert_eq!(entries.len(), 2);

        let keys: Vec<&str> = entries.iter().map(|e| e.key.as_str()).collect();
        assert!(keys.contains(&"a.txt"));
        assert!(keys.contains(&"b.txt"));
        for entry in &entries {
            assert!(entry.url.contains(entry.key.as_str()));
        }
    }

    #[tokio::test]
    async fn test_upload_overwrites_same_key() {
        let (service, repository) = setup();
        service.upload_file(upload("report.txt", b"hello")).await.unwrap();
        let key = service
            .upload_file(upload("report.txt", b"hello world"))
            .await
            .unwrap();

        let entries = service.get_all_files().await.unwrap();
        assert_eq!(entries.len(), 1);

        let record = repository
            .get_item(&ItemId::from(&key))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(record.size, 11);
    }
}
