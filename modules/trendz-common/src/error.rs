use thiserror::Error;

/// A repository collaborator failed a read or write. Fatal for the
/// current batch item; already-committed items are unaffected.
#[derive(Debug, Error)]
#[error("Storage error: {0}")]
pub struct StorageError(pub String);

impl StorageError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}
