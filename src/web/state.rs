use std::sync::Arc;

use crate::backend::Backend;
use crate::web::security::RateLimiter;

pub struct AppState {
    pub backend: Arc<dyn Backend>,
    pub rate_limiter: RateLimiter,
}

impl AppState {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            rate_limiter: RateLimiter::new(),
        }
    }
}
