use thiserror::Error;

/// Errors surfaced by an [`ItemStore`](crate::ItemStore) implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Backend error: {0}")]
    Backend(String),
    #[error("Seed decode error: {0}")]
    Decode(String),
    #[error("Seed read error: {0}")]
    Io(String),
    #[error("Duplicate item id: {0}")]
    DuplicateId(u64),
    #[error("Item id space exhausted")]
    IdSpaceExhausted,
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Decode(e.to_string())
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e.to_string())
    }
}

impl StoreError {
    pub fn backend<E: std::fmt::Display>(err: E) -> Self {
        Self::Backend(err.to_string())
    }
}
