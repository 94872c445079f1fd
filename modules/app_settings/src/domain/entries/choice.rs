//! Enum-backed entries (appearance, log level)

use std::marker::PhantomData;

use crate::contract::{AppearanceType, Environment, LogLevel, SettingChoice, SettingEntry};
use crate::domain::TypedStore;

use super::{capitalized, check_index, resolve};

/// Entry over a closed set of values
pub struct ChoiceSetting<T: SettingChoice> {
    store: TypedStore,
    _choice: PhantomData<fn() -> T>,
}

pub type AppearanceSetting = ChoiceSetting<AppearanceType>;
pub type LogLevelSetting = ChoiceSetting<LogLevel>;

impl<T: SettingChoice> ChoiceSetting<T> {
    pub fn new(store: TypedStore) -> Self {
        Self {
            store,
            _choice: PhantomData,
        }
    }

    /// Resolved typed value
    pub fn current(&self) -> T {
        resolve(
            self.store.get::<T>(T::PERSISTENT_KEY),
            None,
            T::default_choice(),
            &T::all(),
        )
    }

    /// Persist `value` directly, bypassing the index-based picker path
    pub fn save(&self, value: &T) {
        if let Err(err) = self.store.put(value, T::PERSISTENT_KEY) {
            tracing::warn!(key = T::PERSISTENT_KEY, error = %err, "failed to persist setting");
        }
    }

    fn option(&self, index: usize) -> T {
        let options = T::all();
        check_index(T::PERSISTENT_KEY, index, options.len());
        options[index].clone()
    }
}

impl<T: SettingChoice> SettingEntry for ChoiceSetting<T> {
    fn persistent_key(&self) -> String {
        T::PERSISTENT_KEY.to_string()
    }

    fn default_value(&self) -> String {
        T::default_choice().raw_value()
    }

    fn current_value(&self) -> String {
        self.current().raw_value()
    }

    fn supported_options(&self) -> Vec<String> {
        T::all().iter().map(SettingChoice::raw_value).collect()
    }

    fn title(&self) -> String {
        T::TITLE.to_string()
    }

    fn has_selected_option_at_index(&self, index: usize) -> bool {
        self.option(index) == self.current()
    }

    fn display_name_for_option_at_index(&self, index: usize) -> String {
        self.option(index).display_name()
    }

    fn save_with_supported_value(&self, index: usize) {
        let value = self.option(index);
        self.save(&value);
    }

    fn clear(&self) {
        if let Err(err) = self.store.remove(T::PERSISTENT_KEY) {
            tracing::warn!(key = T::PERSISTENT_KEY, error = %err, "failed to clear setting");
        }
    }
}

impl ChoiceSetting<AppearanceType> {
    /// Whether the interface should render dark
    ///
    /// `system` defers to the environment's current style.
    pub fn is_dark(&self, environment: &dyn Environment) -> bool {
        match self.current() {
            AppearanceType::System => environment.is_dark_mode(),
            value => value == AppearanceType::Dark,
        }
    }
}

impl SettingChoice for AppearanceType {
    const PERSISTENT_KEY: &'static str = "AppAppearance";
    const TITLE: &'static str = "Appearance";

    fn all() -> Vec<Self> {
        AppearanceType::ALL.to_vec()
    }

    fn default_choice() -> Self {
        AppearanceType::System
    }

    fn raw_value(&self) -> String {
        self.as_str().to_string()
    }

    fn display_name(&self) -> String {
        capitalized(self.as_str())
    }
}

impl SettingChoice for LogLevel {
    const PERSISTENT_KEY: &'static str = "AppLogLevel";
    const TITLE: &'static str = "Logging";

    fn all() -> Vec<Self> {
        LogLevel::ALL.to_vec()
    }

    fn default_choice() -> Self {
        LogLevel::build_default()
    }

    fn raw_value(&self) -> String {
        self.as_str().to_string()
    }

    fn display_name(&self) -> String {
        self.title().to_string()
    }
}
