//! Configuration types shared across crates.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Server configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:1323").
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Expose the /apikeys listing endpoint (default: true).
    /// Disable when the key list itself should not be queryable.
    #[serde(default = "default_list_keys_enabled")]
    pub list_keys_enabled: bool,
    /// Seconds to let in-flight requests finish after an interrupt signal.
    /// Requests still running after the window are aborted.
    #[serde(default = "default_shutdown_grace_secs")]
    pub shutdown_grace_secs: u64,
}

/// Key file and header lookup configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KeysConfig {
    /// Path to the key file (newline-delimited, created if missing).
    #[serde(default = "default_key_file")]
    pub path: PathBuf,
    /// Ordered list of header names checked for the presented key.
    /// The first header with a non-empty value wins. Matching is
    /// case-insensitive per HTTP semantics.
    #[serde(default = "default_headers")]
    pub headers: Vec<String>,
    /// Skip lines starting with `#` or `;` when loading the key file
    /// (default: true). When false, only blank lines are skipped and
    /// comment-looking lines are loaded as keys verbatim.
    #[serde(default = "default_strip_comments")]
    pub strip_comments: bool,
}

fn default_bind() -> String {
    "127.0.0.1:1323".to_string()
}

fn default_list_keys_enabled() -> bool {
    true
}

fn default_shutdown_grace_secs() -> u64 {
    10
}

fn default_key_file() -> PathBuf {
    PathBuf::from(crate::DEFAULT_KEY_FILE)
}

fn default_headers() -> Vec<String> {
    vec!["x-api-key".to_string(), "apikey".to_string()]
}

fn default_strip_comments() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            list_keys_enabled: default_list_keys_enabled(),
            shutdown_grace_secs: default_shutdown_grace_secs(),
        }
    }
}

impl ServerConfig {
    /// Get the shutdown grace window as a Duration.
    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_secs)
    }
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            path: default_key_file(),
            headers: default_headers(),
            strip_comments: default_strip_comments(),
        }
    }
}

impl KeysConfig {
    /// Validate key lookup configuration.
    /// Returns warnings for configs that are risky but allowed,
    /// and errors for configs that can never work.
    pub fn validate(&self) -> Result<Vec<String>, String> {
        let mut warnings = Vec::new();

        if self.headers.is_empty() {
            return Err("keys.headers cannot be empty: no request could ever \
                 present a key. Configure at least one header name."
                .to_string());
        }

        if !self.strip_comments {
            warnings.push(
                "keys.strip_comments=false loads comment-looking lines (`#`, `;`) \
                 as accepted keys. Only use this for compatibility with key files \
                 that never carry comments."
                    .to_string(),
            );
        }

        Ok(warnings)
    }
}

/// Complete application configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Key file and header lookup configuration.
    #[serde(default)]
    pub keys: KeysConfig,
}

impl AppConfig {
    /// Create a test configuration with sensible defaults.
    ///
    /// **For testing only.** Uses the default header list and a key file
    /// path tests are expected to override.
    pub fn for_testing() -> Self {
        Self::default()
    }
}
