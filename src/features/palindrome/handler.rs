use axum::Json;
use axum::extract::Query;

use crate::features::palindrome::dto::{CheckQuery, CheckResponse};
use crate::features::palindrome::predicate::is_palindrome;

/// Stateless check; an absent `word` parameter is treated as the empty string.
pub async fn handle_is_palindrome(Query(query): Query<CheckQuery>) -> Json<CheckResponse> {
    let word = query.word.unwrap_or_default();

    Json(CheckResponse {
        message: is_palindrome(&word),
    })
}
