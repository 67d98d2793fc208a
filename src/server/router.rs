use axum::Router;
use axum::routing::{delete, get, post};

use crate::features::palindrome::handle_is_palindrome;
use crate::features::words::{handle_delete_word, handle_list_words, handle_save_palindrome};
use crate::server::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/ispalindrome", get(handle_is_palindrome))
        .route("/savepalindrome", post(handle_save_palindrome))
        .route("/words", get(handle_list_words))
        .route("/words/:id", delete(handle_delete_word))
        .with_state(state)
}
