use thiserror::Error;

/// Errors surfaced by the listing store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("listing not found: {id}")]
    NotFound { id: String },
}
