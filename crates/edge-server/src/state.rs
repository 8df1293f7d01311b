use edge_core::config::EdgeConfig;
use std::sync::Arc;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<EdgeConfig>,
    pub http_client: reqwest::Client,
}

impl AppState {
    pub fn new(cfg: EdgeConfig) -> Self {
        Self {
            cfg: Arc::new(cfg),
            http_client: reqwest::Client::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_stores_config() {
        let state = AppState::new(EdgeConfig::default());
        assert_eq!(state.cfg.root_domain, "yoohoo.guru");
    }
}
