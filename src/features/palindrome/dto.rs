use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CheckQuery {
    pub word: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub message: bool,
}
