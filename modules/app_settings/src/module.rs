//! Module composition root
//!
//! Builds stores, entries and the logger from [`Config`] and hands them out
//! by reference. Nothing here is global; the host keeps the module alive for
//! the process lifetime.

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::config::Config;
use crate::contract::{Environment, LocaleDisplayNames, LogSink, SecureBackend, SettingEntry};
use crate::domain::{
    AppLogManager, AppearanceSetting, LanguageSetting, LogLevelSetting, LoggingService,
    SecureStore, SettingsAction, SettingsScreen, TypedStore,
};
use crate::infra::locale_names::BuiltinLocaleNames;
use crate::infra::storage::{JsonFileBackend, MemoryBackend};

/// Host-provided collaborators
pub struct Collaborators {
    pub secure_backend: Arc<dyn SecureBackend>,
    pub environment: Arc<dyn Environment>,
    pub locale_names: Arc<dyn LocaleDisplayNames>,
    pub sinks: Vec<Arc<dyn LogSink>>,
}

impl Collaborators {
    /// Collaborators with the built-in locale table and no sinks
    pub fn new(secure_backend: Arc<dyn SecureBackend>, environment: Arc<dyn Environment>) -> Self {
        Self {
            secure_backend,
            environment,
            locale_names: Arc::new(BuiltinLocaleNames),
            sinks: Vec::new(),
        }
    }

    pub fn with_sinks(mut self, sinks: Vec<Arc<dyn LogSink>>) -> Self {
        self.sinks = sinks;
        self
    }

    pub fn with_locale_names(mut self, names: Arc<dyn LocaleDisplayNames>) -> Self {
        self.locale_names = names;
        self
    }
}

/// App settings module
pub struct AppSettingsModule {
    config: Config,
    store: TypedStore,
    secure_store: SecureStore,
    environment: Arc<dyn Environment>,
    appearance: Arc<AppearanceSetting>,
    language: Arc<LanguageSetting>,
    log_level: Arc<LogLevelSetting>,
    logger: AppLogManager,
}

impl AppSettingsModule {
    /// Wire the module; must run inside a Tokio runtime
    pub fn init(config: Config, collaborators: Collaborators) -> Result<Self> {
        let store = match &config.store.directory {
            Some(directory) => {
                let backend =
                    JsonFileBackend::for_scope(directory, config.store.app_group.as_deref())
                        .context("failed to open settings store")?;
                TypedStore::new(Arc::new(backend))
            }
            None => TypedStore::new(Arc::new(MemoryBackend::new())),
        };
        let secure_store = SecureStore::new(collaborators.secure_backend);

        let appearance = Arc::new(AppearanceSetting::new(store.clone()));
        let log_level = Arc::new(LogLevelSetting::new(store.clone()));
        let language = Arc::new(
            LanguageSetting::new(
                store.clone(),
                config.language.supported_locales.clone(),
                collaborators.environment.clone(),
                collaborators.locale_names,
            )
            .with_default_locale(config.language.default_locale.clone()),
        );

        let service = Arc::new(LoggingService::start().context("failed to start logging")?);
        service.configure(collaborators.sinks);
        let minimum_level = config
            .logging
            .minimum_level
            .unwrap_or_else(|| log_level.current());
        let logger = AppLogManager::new(service, minimum_level);

        tracing::info!(
            persistent = config.store.directory.is_some(),
            minimum_level = %minimum_level,
            "app settings initialized"
        );

        Ok(Self {
            config,
            store,
            secure_store,
            environment: collaborators.environment,
            appearance,
            language,
            log_level,
            logger,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &TypedStore {
        &self.store
    }

    pub fn secure_store(&self) -> &SecureStore {
        &self.secure_store
    }

    pub fn appearance(&self) -> &Arc<AppearanceSetting> {
        &self.appearance
    }

    pub fn language(&self) -> &Arc<LanguageSetting> {
        &self.language
    }

    pub fn log_level(&self) -> &Arc<LogLevelSetting> {
        &self.log_level
    }

    pub fn logger(&self) -> &AppLogManager {
        &self.logger
    }

    /// Dark style resolved against the current environment
    pub fn is_dark(&self) -> bool {
        self.appearance.is_dark(self.environment.as_ref())
    }

    /// Screen listing `actions` above the appearance, language and logging entries
    pub fn settings_screen(&self, actions: Vec<SettingsAction>) -> SettingsScreen {
        let settings: Vec<Arc<dyn SettingEntry>> = vec![
            self.appearance.clone(),
            self.language.clone(),
            self.log_level.clone(),
        ];
        SettingsScreen::new(actions, settings)
    }
}
