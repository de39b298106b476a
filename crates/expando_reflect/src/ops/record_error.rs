use alloc::string::String;

use thiserror::Error;

/// An error returned by a [`DynamicRecord`](crate::ops::DynamicRecord) operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RecordError {
    /// Strict insertion of a key that is already present.
    #[error("an entry with key `{0}` already exists in the record")]
    DuplicateKey(String),

    /// Attribute-style read of a field that does not exist.
    #[error("the record has no field named `{0}`")]
    MissingField(String),

    /// Attempt to write a named field into a scalar record.
    #[error("a scalar record cannot hold named fields")]
    ScalarRecord,
}
