//! Application state for the Settlement Engine API.

use std::sync::Arc;

use crate::config::{ConfigLoader, SettlementConfig};

/// Shared application state.
///
/// Holds the loaded settlement configuration, shared read-only across all
/// request handlers.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the settlement configuration.
    pub fn settlement_config(&self) -> &SettlementConfig {
        self.config.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_config() {
        let state = AppState::new(ConfigLoader::from_config(SettlementConfig::nicaragua()));
        let cloned = state.clone();

        assert!(std::ptr::eq(state.settlement_config(), cloned.settlement_config()));
    }
}
