//! Log sink trait
//!
//! A sink is one destination of the logging service fan-out (console,
//! crash reporter, file, ...).

use super::model::{LogLevel, LogRecord};

/// Destination for application log records
///
/// The leveled methods default to [`LogSink::write`]; sinks that route
/// levels differently override them. Errors and panics raised here are
/// contained by the logging service and never reach the caller of `log`.
pub trait LogSink: Send + Sync {
    /// Deliver one record
    fn write(&self, record: &LogRecord) -> anyhow::Result<()>;

    /// Tag subsequent records with a correlation identifier
    fn set_identifier(&self, _identifier: Option<&str>) -> anyhow::Result<()> {
        Ok(())
    }

    fn verbose(&self, record: &LogRecord) -> anyhow::Result<()> {
        self.write(record)
    }

    fn debug(&self, record: &LogRecord) -> anyhow::Result<()> {
        self.write(record)
    }

    fn info(&self, record: &LogRecord) -> anyhow::Result<()> {
        self.write(record)
    }

    fn warning(&self, record: &LogRecord) -> anyhow::Result<()> {
        self.write(record)
    }

    fn error(&self, record: &LogRecord) -> anyhow::Result<()> {
        self.write(record)
    }
}

/// Route a record to the sink method matching its level
pub(crate) fn dispatch(sink: &dyn LogSink, record: &LogRecord) -> anyhow::Result<()> {
    match record.level {
        LogLevel::Verbose => sink.verbose(record),
        LogLevel::Debug => sink.debug(record),
        LogLevel::Info => sink.info(record),
        LogLevel::Warning => sink.warning(record),
        LogLevel::Error => sink.error(record),
    }
}
