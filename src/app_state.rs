use std::sync::Arc;

use crate::services::strictness::StrictnessPolicy;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub strictness: Arc<StrictnessPolicy>,
}

impl AppState {
    pub fn new(strictness: StrictnessPolicy) -> Self {
        Self {
            strictness: Arc::new(strictness),
        }
    }
}
