/// Validation errors for domain value objects and update requests
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    // ItemId validation errors
    #[error("Item id cannot be empty")]
    EmptyItemId,
    #[error("Item id too long: {actual} bytes (max: {max})")]
    ItemIdTooLong { actual: usize, max: usize },
    #[error("Invalid character in item id: '{0}'")]
    InvalidItemIdCharacter(char),

    // ObjectKey validation errors
    #[error("Object key cannot be empty")]
    EmptyObjectKey,
    #[error("Object key too long: {actual} bytes (max: {max})")]
    ObjectKeyTooLong { actual: usize, max: usize },
    #[error("Invalid character in object key: '{0}'")]
    InvalidObjectKeyCharacter(char),
    #[error("Object key cannot start with '/'")]
    ObjectKeyStartsWithSlash,
    #[error("Object key cannot contain '//'")]
    ObjectKeyContainsDoubleSlash,

    // BucketName validation errors
    #[error("Bucket name too short: {actual} characters (min: {min})")]
    BucketNameTooShort { actual: usize, min: usize },
    #[error("Bucket name too long: {actual} characters (max: {max})")]
    BucketNameTooLong { actual: usize, max: usize },
    #[error("Bucket name must start with lowercase letter or number")]
    BucketNameInvalidStart,
    #[error("Bucket name must end with lowercase letter or number")]
    BucketNameInvalidEnd,
    #[error(
        "Invalid character in bucket name: '{0}'. Only lowercase letters, numbers, and hyphens allowed"
    )]
    BucketNameInvalidCharacter(char),
    #[error("Bucket name cannot contain consecutive hyphens")]
    BucketNameConsecutiveHyphens,
    #[error("Bucket name cannot be formatted as an IP address")]
    BucketNameLooksLikeIpAddress,

    // Item update validation errors
    #[error("createdAt field cannot be updated")]
    ImmutableCreatedAt,
    #[error("No valid fields provided for update")]
    EmptyUpdate,
}
