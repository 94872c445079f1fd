//! Level-gated front for the logging service

use std::sync::Arc;

use crate::contract::LogLevel;
use crate::domain::entries::LogLevelSetting;

use super::LoggingService;

/// Drops calls below a minimum level before they reach the service queue
#[derive(Clone)]
pub struct AppLogManager {
    service: Arc<LoggingService>,
    minimum_level: LogLevel,
}

impl AppLogManager {
    pub fn new(service: Arc<LoggingService>, minimum_level: LogLevel) -> Self {
        Self {
            service,
            minimum_level,
        }
    }

    /// Gate on the level persisted by the log level entry
    pub fn from_setting(service: Arc<LoggingService>, setting: &LogLevelSetting) -> Self {
        Self::new(service, setting.current())
    }

    pub fn minimum_level(&self) -> LogLevel {
        self.minimum_level
    }

    pub fn service(&self) -> &Arc<LoggingService> {
        &self.service
    }

    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.minimum_level
    }

    /// Forward to the service unless `level` is below the minimum
    #[track_caller]
    pub fn log(&self, category: Option<&str>, level: LogLevel, message: Option<&str>) {
        if !self.is_enabled(level) {
            return;
        }
        let message = message.unwrap_or_default();
        match level {
            LogLevel::Verbose => self.service.verbose(category, message),
            LogLevel::Debug => self.service.debug(category, message),
            LogLevel::Info => self.service.info(category, message),
            LogLevel::Warning => self.service.warning(category, message),
            LogLevel::Error => self.service.error(category, message),
        }
    }

    #[track_caller]
    pub fn verbose(&self, category: Option<&str>, message: &str) {
        self.log(category, LogLevel::Verbose, Some(message));
    }

    #[track_caller]
    pub fn debug(&self, category: Option<&str>, message: &str) {
        self.log(category, LogLevel::Debug, Some(message));
    }

    #[track_caller]
    pub fn info(&self, category: Option<&str>, message: &str) {
        self.log(category, LogLevel::Info, Some(message));
    }

    #[track_caller]
    pub fn warning(&self, category: Option<&str>, message: &str) {
        self.log(category, LogLevel::Warning, Some(message));
    }

    #[track_caller]
    pub fn error(&self, category: Option<&str>, message: &str) {
        self.log(category, LogLevel::Error, Some(message));
    }

    pub fn set_identifier(&self, identifier: Option<String>) {
        self.service.set_identifier(identifier);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TypedStore;

    #[tokio::test]
    async fn test_gate_threshold() {
        let service = Arc::new(LoggingService::start().unwrap());
        let manager = AppLogManager::new(service, LogLevel::Warning);

        assert!(!manager.is_enabled(LogLevel::Verbose));
        assert!(!manager.is_enabled(LogLevel::Info));
        assert!(manager.is_enabled(LogLevel::Warning));
        assert!(manager.is_enabled(LogLevel::Error));
    }

    #[tokio::test]
    async fn test_minimum_level_from_persisted_setting() {
        let store = TypedStore::in_memory();
        let setting = LogLevelSetting::new(store);
        setting.save(&LogLevel::Info);

        let service = Arc::new(LoggingService::start().unwrap());
        let manager = AppLogManager::from_setting(service, &setting);
        assert_eq!(manager.minimum_level(), LogLevel::Info);
    }
}
