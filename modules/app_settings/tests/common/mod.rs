//! Common test utilities: recording and misbehaving sinks
#![allow(dead_code)]

use anyhow::anyhow;
use app_settings::{LogLevel, LogRecord, LogSink};
use parking_lot::Mutex;

/// Everything a sink observed, in delivery order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observed {
    Record {
        level: LogLevel,
        category: Option<String>,
        message: String,
    },
    Identifier(Option<String>),
}

/// Sink that remembers every call
#[derive(Default)]
pub struct RecordingSink {
    seen: Mutex<Vec<Observed>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observed(&self) -> Vec<Observed> {
        self.seen.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.seen
            .lock()
            .iter()
            .filter_map(|o| match o {
                Observed::Record { message, .. } => Some(message.clone()),
                Observed::Identifier(_) => None,
            })
            .collect()
    }
}

impl LogSink for RecordingSink {
    fn write(&self, record: &LogRecord) -> anyhow::Result<()> {
        self.seen.lock().push(Observed::Record {
            level: record.level,
            category: record.category.clone(),
            message: record.message.clone(),
        });
        Ok(())
    }

    fn set_identifier(&self, identifier: Option<&str>) -> anyhow::Result<()> {
        self.seen
            .lock()
            .push(Observed::Identifier(identifier.map(str::to_owned)));
        Ok(())
    }
}

/// Sink whose every delivery fails
pub struct FailingSink;

impl LogSink for FailingSink {
    fn write(&self, _record: &LogRecord) -> anyhow::Result<()> {
        Err(anyhow!("crash reporter offline"))
    }

    fn set_identifier(&self, _identifier: Option<&str>) -> anyhow::Result<()> {
        Err(anyhow!("crash reporter offline"))
    }
}

/// Sink that panics on delivery
pub struct PanickingSink;

impl LogSink for PanickingSink {
    fn write(&self, _record: &LogRecord) -> anyhow::Result<()> {
        panic!("sink exploded");
    }
}
