//! Contract models
//!
//! Values persisted by setting entries and records flowing through the
//! logging service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of an application log record, ordered from most to least verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Verbose,
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// Every level, in ascending severity
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Verbose,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
    ];

    /// Build-profile policy: everything in debug builds, warnings and up otherwise
    pub fn build_default() -> Self {
        if cfg!(debug_assertions) {
            LogLevel::Verbose
        } else {
            LogLevel::Warning
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Verbose => "verbose",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
        }
    }

    /// Human-readable title shown in the picker
    pub fn title(self) -> &'static str {
        match self {
            LogLevel::Verbose => "Verbose",
            LogLevel::Debug => "Debug",
            LogLevel::Info => "Info",
            LogLevel::Warning => "Warning",
            LogLevel::Error => "Error",
        }
    }

    /// Marker prefixed to formatted log lines
    pub fn icon(self) -> &'static str {
        match self {
            LogLevel::Verbose => "⚪",
            LogLevel::Debug => "🟢",
            LogLevel::Info => "🔵",
            LogLevel::Warning => "🟠",
            LogLevel::Error => "🔴",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "verbose" | "trace" => Ok(LogLevel::Verbose),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warning" | "warn" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            other => Err(format!("unknown log level: {other}")),
        }
    }
}

/// Visual appearance preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppearanceType {
    /// Follow the operating system
    #[default]
    System,
    Light,
    Dark,
}

impl AppearanceType {
    pub const ALL: [AppearanceType; 3] = [
        AppearanceType::System,
        AppearanceType::Light,
        AppearanceType::Dark,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AppearanceType::System => "system",
            AppearanceType::Light => "light",
            AppearanceType::Dark => "dark",
        }
    }
}

/// How many options of an entry may be selected at once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum SelectionType {
    #[default]
    Single,
}

/// One choice of an option-list entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SettingOption {
    /// Persisted identity of the option
    pub code: i64,
    /// Label shown in the picker
    pub title: String,
}

impl SettingOption {
    pub fn new(code: i64, title: impl Into<String>) -> Self {
        Self {
            code,
            title: title.into(),
        }
    }
}

/// A locale identifier such as `en_US`, `pt-BR` or `zh_Hans_CN`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleId(String);

impl LocaleId {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self(identifier.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn components(&self) -> impl Iterator<Item = &str> {
        self.0.split(['_', '-']).filter(|part| !part.is_empty())
    }

    /// Lower-cased language component, e.g. `en` for `en_US`
    pub fn language_code(&self) -> String {
        self.components()
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase()
    }

    /// Upper-cased region component when the identifier carries one
    ///
    /// A region is a trailing component of two letters or three digits
    /// (`US`, `419`); scripts such as `Hans` are skipped.
    pub fn region_code(&self) -> Option<String> {
        let parts: Vec<&str> = self.components().collect();
        if parts.len() < 2 {
            return None;
        }
        let last = parts[parts.len() - 1];
        let is_alpha_region = last.len() == 2 && last.chars().all(|c| c.is_ascii_alphabetic());
        let is_numeric_region = last.len() == 3 && last.chars().all(|c| c.is_ascii_digit());
        (is_alpha_region || is_numeric_region).then(|| last.to_ascii_uppercase())
    }

    fn region_matches_language(&self) -> bool {
        self.region_code()
            .is_some_and(|region| region.eq_ignore_ascii_case(&self.language_code()))
    }

    /// Short code used in analytics and headers: `fr` for `fr_FR`, `en_us` for `en_US`
    pub fn abbreviation(&self) -> String {
        if self.region_matches_language() {
            return self.language_code();
        }
        self.0.to_ascii_lowercase()
    }

    /// Name of the localization bundle directory: `fr` or `en-US`
    pub fn lproj_name(&self) -> String {
        let language = self.language_code();
        match self.region_code() {
            Some(region) if !self.region_matches_language() => format!("{language}-{region}"),
            _ => language,
        }
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocaleId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Well-known and custom tags of the secure store
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SecureEntry {
    AccessToken,
    Custom(String),
}

impl SecureEntry {
    pub fn entry_key(&self) -> &str {
        match self {
            SecureEntry::AccessToken => "Access-Token",
            SecureEntry::Custom(key) => key,
        }
    }
}

/// A single leveled log call, fanned out to every configured sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub category: Option<String>,
    pub message: String,
    pub file: &'static str,
    pub line: u32,
    pub timestamp: DateTime<Utc>,
}

impl LogRecord {
    /// Build a record attributed to the caller's source location
    #[track_caller]
    pub fn new(level: LogLevel, category: Option<&str>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            level,
            category: category.map(str::to_owned),
            message: message.into(),
            file: location.file(),
            line: location.line(),
            timestamp: Utc::now(),
        }
    }

    /// `"<icon> [<category>] <message>"`, or without brackets when uncategorised
    pub fn formatted(&self) -> String {
        match &self.category {
            Some(category) => format!("{} [{}] {}", self.level.icon(), category, self.message),
            None => format!("{} {}", self.level.icon(), self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Verbose < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
    }

    #[test]
    fn test_log_level_from_str() {
        assert_eq!("WARN".parse::<LogLevel>(), Ok(LogLevel::Warning));
        assert_eq!("verbose".parse::<LogLevel>(), Ok(LogLevel::Verbose));
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_log_level_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&LogLevel::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
        let back: LogLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LogLevel::Warning);
    }

    #[test]
    fn test_locale_components() {
        let us = LocaleId::new("en_US");
        assert_eq!(us.language_code(), "en");
        assert_eq!(us.region_code().as_deref(), Some("US"));
        assert_eq!(us.abbreviation(), "en_us");
        assert_eq!(us.lproj_name(), "en-US");

        let fr = LocaleId::new("fr_FR");
        assert_eq!(fr.abbreviation(), "fr");
        assert_eq!(fr.lproj_name(), "fr");

        let script = LocaleId::new("zh_Hans");
        assert_eq!(script.language_code(), "zh");
        assert_eq!(script.region_code(), None);

        let latam = LocaleId::new("es-419");
        assert_eq!(latam.region_code().as_deref(), Some("419"));
    }

    #[test]
    fn test_secure_entry_keys() {
        assert_eq!(SecureEntry::AccessToken.entry_key(), "Access-Token");
        assert_eq!(SecureEntry::Custom("pin".into()).entry_key(), "pin");
    }

    #[test]
    fn test_record_formatting() {
        let record = LogRecord::new(LogLevel::Info, Some("Network"), "connected");
        assert_eq!(record.formatted(), "🔵 [Network] connected");

        let record = LogRecord::new(LogLevel::Error, None, "boom");
        assert_eq!(record.formatted(), "🔴 boom");
        assert!(record.file.ends_with("model.rs"));
    }
}
