//! S3 storage backend built on the object_store crate.
//!
//! The concrete `AmazonS3` store doubles as the signer for presigned URLs,
//! so both halves of the adapter come from a single build.

use anyhow::{Context, Result};
use object_store::aws::{AmazonS3, AmazonS3Builder};
use std::sync::Arc;

use crate::domain::value_objects::BucketName;

/// Configuration for the S3 storage backend
#[derive(Debug, Clone)]
pub struct S3Config {
    pub bucket: BucketName,
    pub region: String,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    pub endpoint: Option<String>,
}

/// Create an S3 store from configuration
pub fn create_s3_store(config: &S3Config) -> Result<Arc<AmazonS3>> {
    let mut builder = AmazonS3Builder::new()
        .with_bucket_name(config.bucket.as_str())
        .with_region(&config.region);

    if let Some(access_key) = &config.access_key {
        builder = builder.with_access_key_id(access_key);
    }

    if let Some(secret_key) = &config.secret_key {
        builder = builder.with_secret_access_key(secret_key);
    }

    if let Some(endpoint) = &config.endpoint {
        builder = builder.with_endpoint(endpoint);
    }

    let store = builder.build().context("Failed to build S3 store")?;

    Ok(Arc::new(store))
}
