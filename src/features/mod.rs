pub mod palindrome;
pub mod words;
