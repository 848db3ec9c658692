use std::sync::Arc;
use parley_persist::ChatStore;
use crate::config::Config;

/// Shared application state passed to all handlers
/// 
/// The store handle is the only process-wide resource; handlers keep nothing else
/// between requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn ChatStore>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn ChatStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }
}
