use std::sync::Arc;

use crate::features::words::WordStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn WordStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn WordStore>) -> Self {
        Self { store }
    }
}
