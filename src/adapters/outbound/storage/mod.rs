pub mod bucket_store_adapter;
pub mod s3;

pub use bucket_store_adapter::BucketStoreAdapter;
pub use s3::{create_s3_store, S3Config};
