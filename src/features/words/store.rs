use async_trait::async_trait;
use thiserror::Error;

use crate::features::words::dto::WordRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence seam for word records. Handlers only see this trait, so tests
/// can substitute an in-memory implementation.
#[async_trait]
pub trait WordStore: Send + Sync {
    /// Inserts a new record and returns it with its assigned id.
    async fn create(&self, text: &str, palindrome: bool) -> Result<WordRecord, StoreError>;

    /// Returns every stored record in insertion order.
    async fn list_all(&self) -> Result<Vec<WordRecord>, StoreError>;

    /// Removes the record with `id`. Deleting an absent id is a successful
    /// no-op; only a statement or connection failure is an error.
    async fn delete_by_id(&self, id: i32) -> Result<(), StoreError>;
}
