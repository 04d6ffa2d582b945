use bytes::Bytes;

use crate::domain::value_objects::ObjectKey;

/// Request to upload a file into the bucket
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub key: ObjectKey,
    pub data: Bytes,
    pub content_type: Option<String>,
}

/// A stored file paired with a URL it can be fetched from
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub key: ObjectKey,
    pub url: String,
}
