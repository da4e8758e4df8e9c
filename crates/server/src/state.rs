//! Application state shared across handlers.

use keygate_core::config::AppConfig;
use keygate_core::{KeySet, keyfile};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Accepted API keys.
    pub keys: Arc<KeySet>,
}

impl AppState {
    /// Create a new application state with an empty key set.
    ///
    /// This performs configuration validation and logs warnings for risky
    /// settings. Panics if configuration is invalid.
    ///
    /// # Panics
    ///
    /// Panics if key lookup configuration validation fails with an error.
    pub fn new(config: AppConfig) -> Self {
        match config.keys.validate() {
            Ok(warnings) => {
                for warning in warnings {
                    tracing::warn!("Configuration warning: {}", warning);
                }
            }
            Err(error) => {
                panic!("Invalid keys configuration: {}", error);
            }
        }

        Self {
            config: Arc::new(config),
            keys: Arc::new(KeySet::new()),
        }
    }

    /// Re-read the key file and atomically replace the key set.
    ///
    /// File I/O happens before any lock is taken. On read failure the
    /// previous contents stay in place and the error is returned. Returns
    /// the number of keys accepted after the swap.
    pub async fn reload_keys(&self) -> keygate_core::Result<usize> {
        let keys = keyfile::load(&self.config.keys.path, self.config.keys.strip_comments).await?;
        self.keys.replace(keys).await;
        Ok(self.keys.len().await)
    }
}
