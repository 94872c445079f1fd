//! Environment collaborators
//!
//! Signals owned by the host platform. Both are re-read on every
//! resolution, so changes in the host are picked up without rebuilding
//! entries.

/// Host environment signals consumed by the language and appearance entries
pub trait Environment: Send + Sync {
    /// Identifier of the current system locale, e.g. `de_DE`
    fn current_locale(&self) -> String;

    /// Whether the system is currently using a dark interface style
    fn is_dark_mode(&self) -> bool;
}

/// Localized names for language and region codes
pub trait LocaleDisplayNames: Send + Sync {
    /// Name of a language code such as `en`
    fn language_name(&self, language_code: &str) -> Option<String>;

    /// Name of a region code such as `US`
    fn region_name(&self, region_code: &str) -> Option<String>;
}
