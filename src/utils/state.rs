use std::sync::Arc;

use crate::db::NewsStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn NewsStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn NewsStore>) -> Self {
        Self { store }
    }
}
