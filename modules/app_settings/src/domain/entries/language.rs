//! Locale-backed language entry

use std::sync::Arc;

use crate::contract::{Environment, LocaleDisplayNames, LocaleId, SettingEntry};
use crate::domain::TypedStore;

use super::{check_index, resolve};

const PERSISTENT_KEY: &str = "AppLanguage";

/// Static default used when neither the store nor the environment decides
pub const DEFAULT_LOCALE: &str = "en_US";

/// Language preference over an externally supplied list of locale identifiers
pub struct LanguageSetting {
    store: TypedStore,
    supported: Vec<String>,
    default_locale: String,
    environment: Arc<dyn Environment>,
    names: Arc<dyn LocaleDisplayNames>,
}

impl LanguageSetting {
    pub fn new(
        store: TypedStore,
        supported: Vec<String>,
        environment: Arc<dyn Environment>,
        names: Arc<dyn LocaleDisplayNames>,
    ) -> Self {
        Self {
            store,
            supported,
            default_locale: DEFAULT_LOCALE.to_string(),
            environment,
            names,
        }
    }

    /// Replace the static default (`en_US` unless configured)
    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = locale.into();
        self
    }

    /// Resolved locale
    pub fn current_locale(&self) -> LocaleId {
        LocaleId::new(self.resolve())
    }

    /// Language component of the resolved locale, e.g. `fr`
    pub fn current_language_code(&self) -> String {
        self.current_locale().language_code()
    }

    /// Persist `locale` directly
    pub fn save(&self, locale: &str) {
        if let Err(err) = self.store.put(locale, PERSISTENT_KEY) {
            tracing::warn!(key = PERSISTENT_KEY, error = %err, "failed to persist setting");
        }
    }

    fn resolve(&self) -> String {
        resolve(
            self.store.get::<String>(PERSISTENT_KEY),
            Some(self.environment.current_locale()),
            self.default_locale.clone(),
            &self.supported,
        )
    }

    fn locale_at(&self, index: usize) -> &str {
        check_index(PERSISTENT_KEY, index, self.supported.len());
        &self.supported[index]
    }

    /// `Language (Region)`, just `Language` when the region repeats the
    /// language, or the raw identifier when a lookup fails
    fn display_name(&self, identifier: &str) -> String {
        let locale = LocaleId::new(identifier);
        let language_code = locale.language_code();
        let Some(language) = self.names.language_name(&language_code) else {
            return identifier.to_string();
        };
        match locale.region_code() {
            None => language,
            Some(region) if region.eq_ignore_ascii_case(&language_code) => language,
            Some(region) => match self.names.region_name(&region) {
                Some(region_name) => format!("{language} ({region_name})"),
                None => identifier.to_string(),
            },
        }
    }
}

impl SettingEntry for LanguageSetting {
    fn persistent_key(&self) -> String {
        PERSISTENT_KEY.to_string()
    }

    fn default_value(&self) -> String {
        let system = self.environment.current_locale();
        if self.supported.contains(&system) {
            return system;
        }
        self.default_locale.clone()
    }

    fn current_value(&self) -> String {
        self.resolve()
    }

    fn supported_options(&self) -> Vec<String> {
        self.supported.clone()
    }

    fn title(&self) -> String {
        "Language".to_string()
    }

    fn has_selected_option_at_index(&self, index: usize) -> bool {
        self.locale_at(index) == self.resolve()
    }

    fn display_name_for_option_at_index(&self, index: usize) -> String {
        self.display_name(self.locale_at(index))
    }

    fn save_with_supported_value(&self, index: usize) {
        let locale = self.locale_at(index).to_string();
        self.save(&locale);
    }

    fn clear(&self) {
        if let Err(err) = self.store.remove(PERSISTENT_KEY) {
            tracing::warn!(key = PERSISTENT_KEY, error = %err, "failed to clear setting");
        }
    }
}
