//! Option-list entry: an injected list of coded options

use crate::contract::{SettingEntry, SettingOption};
use crate::domain::TypedStore;

use super::{capitalized, check_index, resolve};

/// Entry over caller-supplied options, persisted by integer code
pub struct OptionListSetting {
    store: TypedStore,
    key: String,
    options: Vec<SettingOption>,
    default_option: SettingOption,
    group_name: String,
}

impl OptionListSetting {
    pub fn new(
        store: TypedStore,
        key: impl Into<String>,
        options: Vec<SettingOption>,
        default_option: SettingOption,
        group_name: impl Into<String>,
    ) -> Self {
        Self {
            store,
            key: key.into(),
            options,
            default_option,
            group_name: group_name.into(),
        }
    }

    fn codes(&self) -> Vec<i64> {
        self.options.iter().map(|option| option.code).collect()
    }

    /// Resolved option code
    pub fn current_code(&self) -> i64 {
        resolve(
            self.store.get::<i64>(&self.key),
            None,
            self.default_option.code,
            &self.codes(),
        )
    }

    /// Resolved option, when the code belongs to the list
    pub fn current_option(&self) -> Option<&SettingOption> {
        let code = self.current_code();
        self.options.iter().find(|option| option.code == code)
    }

    pub fn options(&self) -> &[SettingOption] {
        &self.options
    }

    fn option(&self, index: usize) -> &SettingOption {
        check_index(&self.key, index, self.options.len());
        &self.options[index]
    }
}

impl SettingEntry for OptionListSetting {
    fn persistent_key(&self) -> String {
        self.key.clone()
    }

    fn default_value(&self) -> String {
        self.default_option.code.to_string()
    }

    fn current_value(&self) -> String {
        self.current_code().to_string()
    }

    fn supported_options(&self) -> Vec<String> {
        self.options.iter().map(|option| option.title.clone()).collect()
    }

    fn title(&self) -> String {
        self.group_name.clone()
    }

    fn has_selected_option_at_index(&self, index: usize) -> bool {
        self.option(index).code == self.current_code()
    }

    fn display_name_for_option_at_index(&self, index: usize) -> String {
        capitalized(&self.option(index).title)
    }

    fn save_with_supported_value(&self, index: usize) {
        let code = self.option(index).code;
        if let Err(err) = self.store.put(&code, &self.key) {
            tracing::warn!(key = %self.key, error = %err, "failed to persist setting");
        }
    }

    fn clear(&self) {
        if let Err(err) = self.store.remove(&self.key) {
            tracing::warn!(key = %self.key, error = %err, "failed to clear setting");
        }
    }
}
