//! Setting entry contract
//!
//! Every user-selectable preference implements [`SettingEntry`]. The trait
//! is index-addressed and stringly-displayed; each variant keeps its domain
//! value type to itself and exposes typed accessors as inherent methods.

use serde::{de::DeserializeOwned, Serialize};

use super::model::SelectionType;

/// One persisted, user-selectable preference
///
/// Index-taking methods require `index < supported_options().len()` and
/// panic otherwise; callers only pass indices obtained from
/// `supported_options()`.
pub trait SettingEntry: Send + Sync {
    /// Key under which the entry persists its value; unique per entry
    fn persistent_key(&self) -> String;

    /// Raw descriptor of the value used when nothing is persisted
    fn default_value(&self) -> String;

    /// Raw descriptor of the resolved value; never fails
    fn current_value(&self) -> String;

    /// Raw descriptors of the selectable options, in display order
    fn supported_options(&self) -> Vec<String>;

    /// Section title shown above the options
    fn title(&self) -> String;

    fn selection_type(&self) -> SelectionType {
        SelectionType::Single
    }

    /// Whether option `index` equals the resolved current value
    fn has_selected_option_at_index(&self, index: usize) -> bool;

    /// Human-readable label of option `index`
    fn display_name_for_option_at_index(&self, index: usize) -> String;

    /// Persist the domain value of option `index`
    fn save_with_supported_value(&self, index: usize);

    /// Forget the persisted value, reverting to default resolution
    fn clear(&self);
}

/// Closed value set backing an enum-style entry
pub trait SettingChoice:
    Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Typed-store key of the entry
    const PERSISTENT_KEY: &'static str;

    /// Section title of the entry
    const TITLE: &'static str;

    /// Every choice, in display order
    fn all() -> Vec<Self>;

    /// Static default
    fn default_choice() -> Self;

    /// Raw descriptor exposed through [`SettingEntry::supported_options`]
    fn raw_value(&self) -> String;

    fn display_name(&self) -> String;
}
