use std::sync::Arc;

use crate::config::RuntimeMode;
use crate::services::vision::VisionClient;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub vision: Arc<dyn VisionClient>,
    pub mode: RuntimeMode,
}

impl AppState {
    pub fn new(vision: impl VisionClient + 'static, mode: RuntimeMode) -> Self {
        Self {
            vision: Arc::new(vision),
            mode,
        }
    }
}
