pub mod dto;
pub mod loader;

pub use dto::{AppConfig, DatabaseConfig};
pub use loader::load_config;
