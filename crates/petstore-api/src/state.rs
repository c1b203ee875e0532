//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use petstore_core::config::AppConfig;

/// Application state passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Instant the state was created, used for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    /// Create state from a loaded configuration.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }

    /// Seconds since the state was created.
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
