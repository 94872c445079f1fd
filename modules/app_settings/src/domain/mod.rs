//! Domain layer - stores, setting entries, screen composition and logging

pub mod entries;
pub mod logging;
pub mod screen;
pub mod secure_store;
pub mod typed_store;

pub use entries::{
    AppearanceSetting, ChoiceSetting, LanguageSetting, LogLevelSetting, OptionListSetting,
};
pub use logging::{AppLogManager, LoggingService};
pub use screen::{Row, Selection, SettingsAction, SettingsScreen};
pub use secure_store::SecureStore;
pub use typed_store::TypedStore;
