use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use http::Method;
use object_store::{
    path::Path as ObjectPath, signer::Signer, Attribute, Attributes,
    ObjectStore as ApacheObjectStore, PutOptions, PutPayload,
};

use crate::{
    domain::{
        errors::{StoreError, StoreResult},
        value_objects::ObjectKey,
    },
    ports::storage::ObjectStore,
};

/// Adapter that implements our ObjectStore trait using Apache object_store.
///
/// URL issuance depends on the backend: S3 stores carry a [`Signer`] and
/// issue presigned URLs; the in-memory dev backend falls back to a
/// deterministic public-style URL built from a configured base.
pub struct BucketStoreAdapter {
    inner: Arc<dyn ApacheObjectStore>,
    signer: Option<Arc<dyn Signer>>,
    public_base_url: Option<String>,
}

impl BucketStoreAdapter {
    pub fn new(store: Arc<dyn ApacheObjectStore>) -> Self {
        Self {
            inner: store,
            signer: None,
            public_base_url: None,
        }
    }

    /// Issue presigned URLs through the given signer
    pub fn with_signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Issue deterministic `{base}/{key}` URLs when no signer is available
    pub fn with_public_base_url(mut self, base: impl Into<String>) -> Self {
        self.public_base_url = Some(base.into());
        self
    }
}

#[async_trait]
impl ObjectStore for BucketStoreAdapter {
    async fn put_object(
        &self,
        key: &ObjectKey,
        data: Bytes,
        content_type: Option<&str>,
    ) -> StoreResult<()> {
        let path = ObjectPath::from(key.as_str());
        let payload = PutPayload::from(data);

        let mut attributes = Attributes::new();
        if let Some(content_type) = content_type {
            attributes.insert(Attribute::ContentType, content_type.to_string().into());
        }
        let opts = PutOptions {
            attributes,
            ..Default::default()
        };

        self.inner
            .put_opts(&path, payload, opts)
            .await
            .map_err(|err| StoreError::backend(format!("Failed to put object: {err}")))?;

        Ok(())
    }

    async fn object_exists(&self, key: &ObjectKey) -> StoreResult<bool> {
        let path = ObjectPath::from(key.as_str());

        match self.inner.head(&path).await {
            Ok(_) => Ok(true),
            Err(object_store::Error::NotFound { .. }) => Ok(false),
            Err(err) => Err(StoreError::backend(format!(
                "Failed to check object existence: {err}"
            ))),
        }
    }

    async fn list_keys(&self) -> StoreResult<Vec<ObjectKey>> {
        let mut stream = self.inner.list(None);
        let mut keys = Vec::new();

        while let Some(result) = futures::StreamExt::next(&mut stream).await {
            let meta = result
                .map_err(|err| StoreError::backend(format!("Failed to list objects: {err}")))?;

            let key = ObjectKey::new(meta.location.to_string())?;
            keys.push(key);
        }

        Ok(keys)
    }

    async fn delete_object(&self, key: &ObjectKey) -> StoreResult<()> {
        let path = ObjectPath::from(key.as_str());

        self.inner.delete(&path).await.map_err(|err| match err {
            object_store::Error::NotFound { .. } => StoreError::FileNotFound { key: key.clone() },
            other => StoreError::backend(format!("Failed to delete object: {other}")),
        })?;

        Ok(())
    }

    async fn get_url(&self, key: &ObjectKey, expires_in: Duration) -> StoreResult<String> {
        let path = ObjectPath::from(key.as_str());

        if let Some(signer) = &self.signer {
            let url = signer
                .signed_url(Method::GET, &path, expires_in)
                .await
                .map_err(|err| StoreError::backend(format!("Failed to sign url: {err}")))?;
            return Ok(url.to_string());
        }

        if let Some(base) = &self.public_base_url {
            return Ok(format!("{}/{}", base.trim_end_matches('/'), key));
        }

        Err(StoreError::backend(
            "storage backend cannot issue urls: no signer or public base configured",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use object_store::memory::InMemory;

    fn adapter() -> BucketStoreAdapter {
        BucketStoreAdapter::new(Arc::new(InMemory::new()))
            .with_public_base_url("http://localhost:3000/files/")
    }

    #[tokio::test]
    async fn test_basic_object_operations() {
        let adapter = adapter();
        let key = ObjectKey::new("test/key".to_string()).unwrap();
        let data = Bytes::from_static(b"test data");

        adapter
            .put_object(&key, data, Some("text/plain"))
            .await
            .unwrap();
        assert!(adapter.object_exists(&key).await.unwrap());

        adapter.delete_object(&key).await.unwrap();
        assert!(!adapter.object_exists(&key).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_keys_returns_everything() {
        let adapter = adapter();
        for name in ["a.txt", "b.txt", "dir/c.txt"] {
            let key = ObjectKey::new(name.to_string()).unwrap();
            adapter
                .put_object(&key, Bytes::from_static(b"x"), None)
                .await
                .unwrap();
        }

        let mut keys: Vec<String> = adapter
            .list_keys()
            .await
            .unwrap()
            .into_iter()
            .map(ObjectKey::into_string)
            .collect();
        keys.sort();

        assert_eq!(keys, vec!["a.txt", "b.txt", "dir/c.txt"]);
    }

    #[tokio::test]
    async fn test_fallback_url_contains_key() {
        let adapter = adapter();
        let key = ObjectKey::new("report.txt".to_string()).unwrap();

        let url = adapter
            .get_url(&key, Duration::from_secs(3600))
            .await
            .unwrap();

        assert_eq!(url, "http://localhost:3000/files/report.txt");
    }

    #[tokio::test]
    async fn test_url_without_signer_or_base_fails() {
        let adapter = BucketStoreAdapter::new(Arc::new(InMemory::new()));
        let key = ObjectKey::new("report.txt".to_string()).unwrap();

        assert!(adapter.get_url(&key, Duration::from_secs(60)).await.is_err());
    }
}
