//! Server test utilities.

use keygate_core::config::AppConfig;
use keygate_server::{AppState, create_router};
use std::path::Path;
use tempfile::TempDir;

/// A test server wrapper with its backing key file.
/// Note: #[allow(dead_code)] because each test file compiles common/ separately.
#[allow(dead_code)]
pub struct TestServer {
    pub router: axum::Router,
    pub state: AppState,
    _temp_dir: TempDir,
}

#[allow(dead_code)]
impl TestServer {
    /// Create a test server whose key file contains `keys`, one per line.
    pub async fn with_keys(keys: &[&str]) -> Self {
        Self::build(keys, |_| {}).await
    }

    /// Create a test server with custom config modifications.
    pub async fn with_config<F>(keys: &[&str], modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        Self::build(keys, modifier).await
    }

    async fn build<F>(keys: &[&str], modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");

        let key_path = temp_dir.path().join("apikeys");
        std::fs::write(&key_path, keys.join("\n")).expect("Failed to write key file");

        let mut config = AppConfig::for_testing();
        config.keys.path = key_path;
        modifier(&mut config);

        let state = AppState::new(config);
        state.reload_keys().await.expect("Failed to load key file");

        let router = create_router(state.clone());

        Self {
            router,
            state,
            _temp_dir: temp_dir,
        }
    }

    /// Path of the backing key file.
    pub fn key_file(&self) -> &Path {
        &self.state.config.keys.path
    }

    /// Overwrite the backing key file with new contents.
    pub fn write_key_file(&self, contents: &str) {
        std::fs::write(self.key_file(), contents).expect("Failed to write key file");
    }
}
