use serde::{Deserialize, Serialize};

/// One persisted word. The palindrome flag is computed once at creation time
/// and stored redundantly; records are created and deleted, never updated.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct WordRecord {
    pub id: i32,
    pub word: String,
    pub palindrome: bool,
}

#[derive(Debug, Deserialize)]
pub struct SaveQuery {
    pub word: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub message: &'static str,
    pub word: String,
    pub palindrome: bool,
}

#[derive(Debug, Serialize)]
pub struct WordListResponse {
    pub words: Vec<WordRecord>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}
