//! Core domain types and shared logic for the keygate API-key service.
//!
//! This crate defines the model used by the server crate:
//! - Configuration types
//! - The concurrent set of accepted keys
//! - Key file loading and parsing

pub mod config;
pub mod error;
pub mod keyfile;
pub mod keyset;

pub use config::{AppConfig, KeysConfig, ServerConfig};
pub use error::{Error, Result};
pub use keyset::KeySet;

/// Default key file path, relative to the working directory.
pub const DEFAULT_KEY_FILE: &str = ".apikeys";
