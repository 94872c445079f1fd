//! Console sink bridging application log records into `tracing`

use parking_lot::RwLock;

use crate::contract::{LogLevel, LogRecord, LogSink};

const TARGET: &str = "app_log";

/// Emits each record as a `tracing` event under the `app_log` target
#[derive(Debug, Default)]
pub struct TracingSink {
    identifier: RwLock<Option<String>>,
}

impl TracingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identifier(&self) -> Option<String> {
        self.identifier.read().clone()
    }
}

impl LogSink for TracingSink {
    fn write(&self, record: &LogRecord) -> anyhow::Result<()> {
        let text = record.formatted();
        let (file, line) = (record.file, record.line);
        let identifier = self.identifier.read();
        let identifier = identifier.as_deref().unwrap_or("-");
        match record.level {
            LogLevel::Verbose => tracing::trace!(target: TARGET, file, line, identifier, "{text}"),
            LogLevel::Debug => tracing::debug!(target: TARGET, file, line, identifier, "{text}"),
            LogLevel::Info => tracing::info!(target: TARGET, file, line, identifier, "{text}"),
            LogLevel::Warning => tracing::warn!(target: TARGET, file, line, identifier, "{text}"),
            LogLevel::Error => tracing::error!(target: TARGET, file, line, identifier, "{text}"),
        }
        Ok(())
    }

    fn set_identifier(&self, identifier: Option<&str>) -> anyhow::Result<()> {
        *self.identifier.write() = identifier.map(str::to_owned);
        Ok(())
    }
}
