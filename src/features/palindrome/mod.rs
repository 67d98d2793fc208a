pub mod dto;
pub mod handler;
pub mod predicate;

pub use dto::CheckResponse;
pub use handler::handle_is_palindrome;
pub use predicate::is_palindrome;
