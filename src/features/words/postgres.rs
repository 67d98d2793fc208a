use async_trait::async_trait;
use sqlx::PgPool;

use crate::features::words::dto::WordRecord;
use crate::features::words::store::{StoreError, WordStore};

/// Word store backed by the shared Postgres pool. Every operation is a single
/// statement running in its own implicit transaction.
#[derive(Clone)]
pub struct PostgresWordStore {
    pool: PgPool,
}

impl PostgresWordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WordStore for PostgresWordStore {
    async fn create(&self, text: &str, palindrome: bool) -> Result<WordRecord, StoreError> {
        let record = sqlx::query_as::<_, WordRecord>(
            "INSERT INTO words (word, palindrome) VALUES ($1, $2) RETURNING id, word, palindrome",
        )
        .bind(text)
        .bind(palindrome)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<WordRecord>, StoreError> {
        let records =
            sqlx::query_as::<_, WordRecord>("SELECT id, word, palindrome FROM words ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(records)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM words WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            tracing::debug!(id, "delete matched no rows");
        }

        Ok(())
    }
}
