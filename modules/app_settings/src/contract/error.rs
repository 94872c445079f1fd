//! Contract error types
//!
//! Domain-facing operations (entry resolution, selection, logging) are total
//! and never surface these; they appear on the lower-level store APIs.

use std::path::PathBuf;

/// Errors raised by the typed key-value store and its backends
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Value could not be serialized for storage
    #[error("failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Stored blob exists but does not decode as the requested type
    #[error("value stored under '{key}' does not decode as the requested type: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Backing file could not be read or written
    #[error("backing store I/O failed for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Backend-specific failure
    #[error("backing store error: {0}")]
    Backend(String),
}

/// Errors raised by secure storage backends
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SecureStoreError {
    /// Backend cannot be reached (locked device, missing entitlement, ...)
    #[error("secure storage unavailable: {0}")]
    Unavailable(String),

    /// Backend rejected the operation
    #[error("secure storage error: {0}")]
    Backend(String),
}

/// Errors raised by the logging subsystem
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoggingError {
    /// No Tokio runtime to host the delivery worker
    #[error("logging service must be started from within a Tokio runtime")]
    NoRuntime,

    /// Global subscriber installation failed
    #[error("failed to initialize tracing: {0}")]
    Init(String),

    /// Delivery worker is gone
    #[error("logging worker has shut down")]
    ShutDown,
}

/// Errors raised while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Invalid(Box::new(err))
    }
}
