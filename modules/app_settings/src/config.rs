//! Configuration for the app settings module

use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::contract::{ConfigError, LogLevel};
use crate::domain::entries::language::DEFAULT_LOCALE;
use crate::infra::locale_names::DEFAULT_SUPPORTED_LOCALES;

const ENV_PREFIX: &str = "APP_SETTINGS_";

/// App settings configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub language: LanguageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where preferences are persisted
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Directory of the JSON settings files; in-memory when unset
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// Shared container name; the standard scope when unset
    #[serde(default)]
    pub app_group: Option<String>,
}

/// Language picker options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageConfig {
    #[serde(default = "default_supported_locales")]
    pub supported_locales: Vec<String>,

    #[serde(default = "default_locale")]
    pub default_locale: String,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            supported_locales: default_supported_locales(),
            default_locale: default_locale(),
        }
    }
}

/// Output format of the diagnostics subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Gate of the application logger; the persisted log level entry when unset
    #[serde(default)]
    pub minimum_level: Option<LogLevel>,

    #[serde(default)]
    pub format: LogFormat,

    /// `EnvFilter` directive used when `RUST_LOG` is not set
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            minimum_level: None,
            format: LogFormat::default(),
            filter: default_filter(),
        }
    }
}

impl Config {
    /// Defaults, then the optional YAML file, then `APP_SETTINGS_*` variables
    ///
    /// Nested keys use a double underscore, e.g.
    /// `APP_SETTINGS_LOGGING__MINIMUM_LEVEL=info`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        let config = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        Ok(config)
    }
}

fn default_supported_locales() -> Vec<String> {
    DEFAULT_SUPPORTED_LOCALES
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

fn default_filter() -> String {
    "info".to_string()
}
