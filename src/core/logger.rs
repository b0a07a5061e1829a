//! Main logger implementation

use super::{
    error::Result,
    fields::{FieldValue, Fields},
    log_core::LogCore,
    log_level::LogLevel,
    metrics::CoreMetrics,
    record::{Caller, Record},
};
use std::backtrace::Backtrace;
use std::panic::Location;
use std::sync::Arc;

/// Leveled structured logger
///
/// Cheap to clone. Every clone and every logger derived with [`Logger::with`]
/// writes through the same [`LogCore`]; static fields are copied on derivation
/// so derived loggers never affect each other.
#[derive(Clone)]
pub struct Logger {
    core: Arc<LogCore>,
    fields: Arc<Fields>,
    add_caller: bool,
    stacktrace_level: Option<LogLevel>,
}

impl Logger {
    /// Start building a logger over `core`
    #[must_use]
    pub fn builder(core: LogCore) -> LoggerBuilder {
        LoggerBuilder::new(Arc::new(core))
    }

    /// A logger that never writes anything
    #[must_use]
    pub fn nop() -> Self {
        Self {
            core: Arc::new(LogCore::disabled()),
            fields: Arc::new(Fields::new()),
            add_caller: false,
            stacktrace_level: None,
        }
    }

    /// Derive a logger carrying one more static field
    #[must_use]
    pub fn with<K, V>(&self, key: K, value: V) -> Logger
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let mut fields = (*self.fields).clone();
        fields.push(key, value);
        self.derive(fields)
    }

    /// Derive a logger carrying every field of `extra` after its own
    #[must_use]
    pub fn with_fields(&self, extra: &Fields) -> Logger {
        let mut fields = (*self.fields).clone();
        fields.extend_from(extra);
        self.derive(fields)
    }

    fn derive(&self, fields: Fields) -> Logger {
        Logger {
            core: Arc::clone(&self.core),
            fields: Arc::new(fields),
            add_caller: self.add_caller,
            stacktrace_level: self.stacktrace_level,
        }
    }

    /// Static fields attached to every record from this logger
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Minimum level of the underlying core; `None` for a no-op logger
    pub fn level(&self) -> Option<LogLevel> {
        self.core.min_level()
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        self.core.enabled(level)
    }

    pub fn captures_caller(&self) -> bool {
        self.add_caller
    }

    /// Lowest level that gets a stack trace attached
    pub fn stacktrace_level(&self) -> Option<LogLevel> {
        self.stacktrace_level
    }

    pub fn core(&self) -> &Arc<LogCore> {
        &self.core
    }

    pub fn metrics(&self) -> &CoreMetrics {
        self.core.metrics()
    }

    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        self.emit(level, message.into(), Fields::new(), Location::caller().into());
    }

    /// Log with per-record structured fields
    #[track_caller]
    pub fn log_with(&self, level: LogLevel, message: impl Into<String>, fields: Fields) {
        self.emit(level, message.into(), fields, Location::caller().into());
    }

    pub(crate) fn emit(&self, level: LogLevel, message: String, fields: Fields, caller: Caller) {
        if !self.core.enabled(level) {
            return;
        }

        let mut record = Record::new(level, message).with_fields(fields);
        if self.add_caller {
            record = record.with_caller(caller);
        }
        if self.stacktrace_level.is_some_and(|min| level >= min) {
            record = record.with_stacktrace(Backtrace::force_capture().to_string());
        }

        if let Err(e) = self.core.write(&record, &self.fields) {
            eprintln!(
                "[LOGGER ERROR] Failed to write record to {}: {}",
                self.core.sink_name(),
                e
            );
        }
    }

    #[inline]
    #[track_caller]
    pub fn trace(&self, message: impl Into<String>) {
        self.log(LogLevel::Trace, message);
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Log at fatal level. The process keeps running.
    #[inline]
    #[track_caller]
    pub fn fatal(&self, message: impl Into<String>) {
        self.log(LogLevel::Fatal, message);
    }

    /// Helper for structured info logging
    #[track_caller]
    pub fn info_with(&self, message: impl Into<String>, fields: Fields) {
        self.log_with(LogLevel::Info, message, fields);
    }

    /// Helper for structured error logging
    #[track_caller]
    pub fn error_with(&self, message: impl Into<String>, fields: Fields) {
        self.log_with(LogLevel::Error, message, fields);
    }

    /// Flush buffered records to the sink
    pub fn sync(&self) -> Result<()> {
        self.core.sync()
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("core", &self.core)
            .field("fields", &self.fields)
            .field("add_caller", &self.add_caller)
            .field("stacktrace_level", &self.stacktrace_level)
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use service_logger::core::{JsonEncoder, LogCore, LogLevel, Logger};
/// use service_logger::sinks::StdoutSink;
///
/// let core = LogCore::new(JsonEncoder::default(), StdoutSink::new(), LogLevel::Debug);
/// let logger = Logger::builder(core)
///     .add_caller(true)
///     .stacktrace_at(LogLevel::Error)
///     .field("service", "orders-api")
///     .build();
///
/// assert_eq!(logger.level(), Some(LogLevel::Debug));
/// ```
pub struct LoggerBuilder {
    core: Arc<LogCore>,
    fields: Fields,
    add_caller: bool,
    stacktrace_level: Option<LogLevel>,
}

impl LoggerBuilder {
    fn new(core: Arc<LogCore>) -> Self {
        Self {
            core,
            fields: Fields::new(),
            add_caller: false,
            stacktrace_level: None,
        }
    }

    /// Record the `file:line` of each logging call
    #[must_use = "builder methods return a new value"]
    pub fn add_caller(mut self, enabled: bool) -> Self {
        self.add_caller = enabled;
        self
    }

    /// Attach a stack trace to records at `level` or above
    #[must_use = "builder methods return a new value"]
    pub fn stacktrace_at(mut self, level: LogLevel) -> Self {
        self.stacktrace_level = Some(level);
        self
    }

    /// Add a static field
    #[must_use = "builder methods return a new value"]
    pub fn field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.push(key, value);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        Logger {
            core: self.core,
            fields: Arc::new(self.fields),
            add_caller: self.add_caller,
            stacktrace_level: self.stacktrace_level,
        }
    }
}
