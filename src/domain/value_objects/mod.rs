pub mod bucket_name;
pub mod item_id;
pub mod object_key;

pub use bucket_name::BucketName;
pub use item_id::ItemId;
pub use object_key::ObjectKey;
