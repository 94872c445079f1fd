//! App Settings Module
//!
//! Typed preference persistence for a mobile application shell: a uniform
//! settings-entry abstraction consumed by a list-based picker, a secure
//! credential store, and an asynchronous multi-sink logger with level gating.

// Public exports
pub mod contract;
pub use contract::{
    AppearanceType, Environment, KeyValueBackend, LocaleDisplayNames, LocaleId, LogLevel,
    LogRecord, LogSink, SecureBackend, SecureEntry, SelectionType, SettingChoice, SettingEntry,
    SettingOption,
};

pub mod config;
pub use config::Config;

pub mod domain;
pub use domain::{
    AppLogManager, AppearanceSetting, ChoiceSetting, LanguageSetting, LogLevelSetting,
    LoggingService, OptionListSetting, SecureStore, SettingsAction, SettingsScreen, TypedStore,
};

pub mod infra;

pub mod module;
pub use module::AppSettingsModule;

pub mod telemetry;
