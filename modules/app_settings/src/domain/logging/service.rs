//! Multi-sink logging service
//!
//! Log calls enqueue onto a single worker task and return immediately. The
//! worker delivers records in FIFO order to the sink list current at the
//! time of delivery; `configure` racing with pending records is accepted,
//! logging being best-effort. Sink calls run on Tokio's blocking pool.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use arc_swap::ArcSwap;
use tokio::sync::{mpsc, oneshot};

use crate::contract::sink::dispatch;
use crate::contract::{LogLevel, LogRecord, LogSink, LoggingError};

type SinkList = Vec<Arc<dyn LogSink>>;

enum Command {
    Record(LogRecord),
    SetIdentifier(Option<String>),
    Flush(oneshot::Sender<()>),
}

/// Fans leveled log calls out to every configured [`LogSink`]
///
/// Unconfigured (no sinks) until [`LoggingService::configure`] is called;
/// records delivered while unconfigured are dropped.
pub struct LoggingService {
    sinks: Arc<ArcSwap<SinkList>>,
    commands: mpsc::UnboundedSender<Command>,
}

impl LoggingService {
    /// Spawn the delivery worker on the current Tokio runtime
    pub fn start() -> Result<Self, LoggingError> {
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| LoggingError::NoRuntime)?;
        let sinks: Arc<ArcSwap<SinkList>> = Arc::new(ArcSwap::from_pointee(Vec::new()));
        let (commands, receiver) = mpsc::unbounded_channel();

        runtime.spawn(run_worker(receiver, sinks.clone()));
        tracing::debug!("logging worker started");

        Ok(Self { sinks, commands })
    }

    /// Replace the whole sink list; last write wins
    pub fn configure(&self, sinks: Vec<Arc<dyn LogSink>>) {
        tracing::debug!(sinks = sinks.len(), "logging sinks configured");
        self.sinks.store(Arc::new(sinks));
    }

    pub fn is_configured(&self) -> bool {
        !self.sinks.load().is_empty()
    }

    /// Propagate a correlation tag to every sink, ordered with log calls
    pub fn set_identifier(&self, identifier: Option<String>) {
        self.submit(Command::SetIdentifier(identifier));
    }

    #[track_caller]
    pub fn log(&self, level: LogLevel, category: Option<&str>, message: impl Into<String>) {
        self.submit(Command::Record(LogRecord::new(level, category, message)));
    }

    /// Verbose data such as payload dumps
    #[track_caller]
    pub fn verbose(&self, category: Option<&str>, message: impl Into<String>) {
        self.log(LogLevel::Verbose, category, message);
    }

    /// Information relevant while debugging the app
    #[track_caller]
    pub fn debug(&self, category: Option<&str>, message: impl Into<String>) {
        self.log(LogLevel::Debug, category, message);
    }

    /// Fine-grained informational events
    #[track_caller]
    pub fn info(&self, category: Option<&str>, message: impl Into<String>) {
        self.log(LogLevel::Info, category, message);
    }

    /// Unexpected but recoverable events
    #[track_caller]
    pub fn warning(&self, category: Option<&str>, message: impl Into<String>) {
        self.log(LogLevel::Warning, category, message);
    }

    /// Failures
    #[track_caller]
    pub fn error(&self, category: Option<&str>, message: impl Into<String>) {
        self.log(LogLevel::Error, category, message);
    }

    /// Deliver an error record synchronously to every sink, then panic
    #[track_caller]
    pub fn fatal(&self, category: Option<&str>, message: impl Into<String>) -> ! {
        let record = LogRecord::new(LogLevel::Error, category, message);
        deliver(&self.sinks.load(), &record);
        panic!("{}", record.message);
    }

    /// Wait until everything enqueued before this call has been delivered
    pub async fn flush(&self) -> Result<(), LoggingError> {
        let (ack, done) = oneshot::channel();
        self.commands
            .send(Command::Flush(ack))
            .map_err(|_| LoggingError::ShutDown)?;
        done.await.map_err(|_| LoggingError::ShutDown)
    }

    fn submit(&self, command: Command) {
        if self.commands.send(command).is_err() {
            tracing::debug!("logging worker gone, dropping command");
        }
    }
}

async fn run_worker(
    mut receiver: mpsc::UnboundedReceiver<Command>,
    sinks: Arc<ArcSwap<SinkList>>,
) {
    while let Some(command) = receiver.recv().await {
        match command {
            Command::Record(record) => {
                let current = sinks.load_full();
                off_runtime(move || deliver(&current, &record)).await;
            }
            Command::SetIdentifier(identifier) => {
                let current = sinks.load_full();
                off_runtime(move || {
                    for sink in current.iter() {
                        isolate(|| sink.set_identifier(identifier.as_deref()));
                    }
                })
                .await;
            }
            Command::Flush(ack) => {
                let _ = ack.send(());
            }
        }
    }
    tracing::debug!("logging worker stopped");
}

/// Run sink calls on the blocking pool, one batch at a time
async fn off_runtime(call: impl FnOnce() + Send + 'static) {
    if let Err(err) = tokio::task::spawn_blocking(call).await {
        tracing::warn!(error = %err, "log delivery task failed");
    }
}

fn deliver(sinks: &SinkList, record: &LogRecord) {
    for sink in sinks {
        isolate(|| dispatch(sink.as_ref(), record));
    }
}

/// Run one sink call, containing both errors and panics
fn isolate(call: impl FnOnce() -> anyhow::Result<()>) {
    match catch_unwind(AssertUnwindSafe(call)) {
        Ok(Ok(())) => {}
        Ok(Err(err)) => tracing::warn!(error = %err, "log sink failed"),
        Err(_) => tracing::warn!("log sink panicked"),
    }
}
