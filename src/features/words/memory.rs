use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::features::words::dto::WordRecord;
use crate::features::words::store::{StoreError, WordStore};

/// In-memory word store, a drop-in substitute for the Postgres store in
/// handler and router tests.
pub struct MemoryWordStore {
    inner: Mutex<Inner>,
}

struct Inner {
    records: Vec<WordRecord>,
    next_id: i32,
}

impl MemoryWordStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryWordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WordStore for MemoryWordStore {
    async fn create(&self, text: &str, palindrome: bool) -> Result<WordRecord, StoreError> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let record = WordRecord {
            id: inner.next_id,
            word: text.to_string(),
            palindrome,
        };
        inner.next_id += 1;
        inner.records.push(record.clone());

        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<WordRecord>, StoreError> {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(inner.records.clone())
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.records.retain(|record| record.id != id);

        Ok(())
    }
}
