pub mod store_errors;
pub mod validation_errors;

pub use store_errors::{StoreError, StoreResult};
pub use validation_errors::ValidationError;
