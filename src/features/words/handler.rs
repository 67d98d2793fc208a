use axum::Json;
use axum::extract::{Path, Query, State};

use crate::core::error::AppError;
use crate::features::palindrome::is_palindrome;
use crate::features::words::dto::{DeleteResponse, SaveQuery, SaveResponse, WordListResponse};
use crate::server::AppState;

pub async fn handle_save_palindrome(
    State(state): State<AppState>,
    Query(query): Query<SaveQuery>,
) -> Result<Json<SaveResponse>, AppError> {
    let word = query.word.unwrap_or_default();
    if word.is_empty() {
        return Err(AppError::bad_request(
            "Word query parameter is required".to_string(),
        ));
    }

    let palindrome = is_palindrome(&word);
    let record = state.store.create(&word, palindrome).await.map_err(|err| {
        tracing::error!(error = %err, "failed to save word");
        AppError::storage("Failed to save the word".to_string())
    })?;

    Ok(Json(SaveResponse {
        message: "Word saved successfully",
        word: record.word,
        palindrome: record.palindrome,
    }))
}

pub async fn handle_list_words(
    State(state): State<AppState>,
) -> Result<Json<WordListResponse>, AppError> {
    let words = state.store.list_all().await.map_err(|err| {
        tracing::error!(error = %err, "failed to fetch words");
        AppError::storage("Failed to fetch words".to_string())
    })?;

    Ok(Json(WordListResponse { words }))
}

pub async fn handle_delete_word(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.store.delete_by_id(id).await.map_err(|err| {
        tracing::error!(error = %err, id, "failed to delete word");
        AppError::storage("Failed to delete the word".to_string())
    })?;

    Ok(Json(DeleteResponse {
        message: "Word deleted successfully",
    }))
}
