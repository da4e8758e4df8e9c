//! Error types for the core domain.

use std::path::PathBuf;
use thiserror::Error;

/// Core domain error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read key file {}: {source}", path.display())]
    KeyFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
