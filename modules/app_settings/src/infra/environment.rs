//! Environment implementations

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;

use crate::contract::Environment;

const FALLBACK_LOCALE: &str = "en_US";
const LOCALE_VARIABLES: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Reads the locale from POSIX locale variables
///
/// The dark-mode flag is pushed in by the host whenever the platform's
/// interface style changes.
#[derive(Debug, Default)]
pub struct ProcessEnvironment {
    dark_mode: AtomicBool,
}

impl ProcessEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_dark_mode(&self, dark: bool) {
        self.dark_mode.store(dark, Ordering::Relaxed);
    }
}

impl Environment for ProcessEnvironment {
    fn current_locale(&self) -> String {
        LOCALE_VARIABLES
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .find_map(|value| normalize_posix_locale(&value))
            .unwrap_or_else(|| FALLBACK_LOCALE.to_string())
    }

    fn is_dark_mode(&self) -> bool {
        self.dark_mode.load(Ordering::Relaxed)
    }
}

/// `de_DE.UTF-8@euro` -> `de_DE`; `C`/`POSIX`/empty have no locale
fn normalize_posix_locale(value: &str) -> Option<String> {
    let base = value.split(['.', '@']).next().unwrap_or_default();
    match base {
        "" | "C" | "POSIX" => None,
        locale => Some(locale.to_string()),
    }
}

/// Environment with fixed, host-updatable values
#[derive(Debug)]
pub struct FixedEnvironment {
    locale: RwLock<String>,
    dark_mode: AtomicBool,
}

impl FixedEnvironment {
    pub fn new(locale: impl Into<String>, dark_mode: bool) -> Self {
        Self {
            locale: RwLock::new(locale.into()),
            dark_mode: AtomicBool::new(dark_mode),
        }
    }

    pub fn set_locale(&self, locale: impl Into<String>) {
        *self.locale.write() = locale.into();
    }

    pub fn set_dark_mode(&self, dark: bool) {
        self.dark_mode.store(dark, Ordering::Relaxed);
    }
}

impl Environment for FixedEnvironment {
    fn current_locale(&self) -> String {
        self.locale.read().clone()
    }

    fn is_dark_mode(&self) -> bool {
        self.dark_mode.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_posix_locale() {
        assert_eq!(normalize_posix_locale("de_DE.UTF-8").as_deref(), Some("de_DE"));
        assert_eq!(normalize_posix_locale("fr_FR@euro").as_deref(), Some("fr_FR"));
        assert_eq!(normalize_posix_locale("C.UTF-8"), None);
        assert_eq!(normalize_posix_locale("POSIX"), None);
        assert_eq!(normalize_posix_locale(""), None);
    }

    #[test]
    fn test_fixed_environment_updates() {
        let env = FixedEnvironment::new("en_US", false);
        env.set_locale("fr_FR");
        env.set_dark_mode(true);
        assert_eq!(env.current_locale(), "fr_FR");
        assert!(env.is_dark_mode());
    }
}
