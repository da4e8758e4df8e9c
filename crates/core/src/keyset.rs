//! Concurrent set of accepted API keys.

use std::collections::HashSet;
use tokio::sync::RwLock;

/// The in-memory set of currently accepted keys.
///
/// Reads run in parallel under a shared lock. `replace` builds the new set
/// before taking the write lock, so the exclusive section is a single swap
/// and readers observe either the full old set or the full new set, never
/// a mix.
///
/// The set is created empty, populated by the initial key file load, and
/// replaced wholesale on each successful reload. Individual keys are never
/// added or removed at runtime.
#[derive(Debug, Default)]
pub struct KeySet {
    keys: RwLock<HashSet<String>>,
}

impl KeySet {
    /// Create an empty key set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the current contents and install a new set.
    /// Duplicate entries collapse.
    pub async fn replace(&self, keys: impl IntoIterator<Item = String>) {
        let next: HashSet<String> = keys.into_iter().collect();
        *self.keys.write().await = next;
    }

    /// Whether `key` is currently accepted. Expects an already-trimmed key.
    pub async fn contains(&self, key: &str) -> bool {
        self.keys.read().await.contains(key)
    }

    /// All current members, in unspecified order.
    pub async fn snapshot(&self) -> Vec<String> {
        self.keys.read().await.iter().cloned().collect()
    }

    /// Number of accepted keys.
    pub async fn len(&self) -> usize {
        self.keys.read().await.len()
    }

    /// Whether the set holds no keys.
    pub async fn is_empty(&self) -> bool {
        self.keys.read().await.is_empty()
    }
}
