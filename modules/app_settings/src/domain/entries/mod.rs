//! Setting entry variants
//!
//! Each variant owns its domain value type and persists itself through the
//! [`TypedStore`](crate::domain::TypedStore) it was built with. There is no
//! shared registry; composing entries into a screen is the caller's job.

pub mod choice;
pub mod language;
pub mod option_list;

pub use choice::{AppearanceSetting, ChoiceSetting, LogLevelSetting};
pub use language::LanguageSetting;
pub use option_list::OptionListSetting;

/// Resolution chain shared by every variant
///
/// stored value, then the environment value if supported, then the static
/// default if supported, then the first option, then the static default
/// unconditionally.
pub(crate) fn resolve<T: Clone + PartialEq>(
    stored: Option<T>,
    environment: Option<T>,
    fallback: T,
    supported: &[T],
) -> T {
    if let Some(value) = stored {
        return value;
    }
    if let Some(value) = environment.filter(|v| supported.contains(v)) {
        return value;
    }
    if supported.contains(&fallback) {
        return fallback;
    }
    supported.first().cloned().unwrap_or(fallback)
}

/// Panic on an index the caller did not obtain from `supported_options()`
#[track_caller]
pub(crate) fn check_index(key: &str, index: usize, len: usize) {
    assert!(
        index < len,
        "option index {index} out of range for setting '{key}' with {len} options"
    );
}

/// Upper-case the first letter of every word
pub(crate) fn capitalized(value: &str) -> String {
    value
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
