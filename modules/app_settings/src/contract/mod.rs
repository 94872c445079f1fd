//! Contract layer - public types and the seams collaborators plug into
//!
//! Models here are persisted through the typed store, so unlike transport
//! models they carry serde derives.

pub mod backend;
pub mod entry;
pub mod environment;
pub mod error;
pub mod model;
pub mod sink;

pub use backend::{KeyValueBackend, SecureBackend};
pub use entry::{SettingChoice, SettingEntry};
pub use environment::{Environment, LocaleDisplayNames};
pub use error::{ConfigError, LoggingError, SecureStoreError, StoreError};
pub use model::{
    AppearanceType, LocaleId, LogLevel, LogRecord, SecureEntry, SelectionType, SettingOption,
};
pub use sink::LogSink;
