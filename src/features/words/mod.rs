pub mod dto;
pub mod handler;
pub mod memory;
pub mod postgres;
pub mod store;

pub use dto::WordRecord;
pub use handler::{handle_delete_word, handle_list_words, handle_save_palindrome};
pub use memory::MemoryWordStore;
pub use postgres::PostgresWordStore;
pub use store::{StoreError, WordStore};
