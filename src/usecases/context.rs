use tracing_appender::non_blocking::WorkerGuard;

use crate::infra::config::AppConfig;

#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
    /// Keeps the file log writer flushing until the app exits.
    #[cfg_attr(not(test), allow(dead_code))]
    pub log_guard: Option<WorkerGuard>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            log_guard: None,
        }
    }
}
