//! Logging core: encoder + sink + minimum level

use super::{
    encoder::JsonEncoder,
    error::Result,
    fields::Fields,
    log_level::LogLevel,
    metrics::CoreMetrics,
    record::Record,
    sink::{NopSink, Sink},
};
use parking_lot::Mutex;

/// Decides whether a record is emitted and how
///
/// The sink sits behind a mutex; a record is encoded outside the lock and
/// written with a single `Sink::write` call, so concurrent loggers sharing a
/// core interleave whole lines only.
pub struct LogCore {
    encoder: JsonEncoder,
    sink: Mutex<Box<dyn Sink>>,
    min_level: Option<LogLevel>,
    metrics: CoreMetrics,
}

impl LogCore {
    pub fn new<S: Sink + 'static>(encoder: JsonEncoder, sink: S, min_level: LogLevel) -> Self {
        Self::from_boxed(encoder, Box::new(sink), min_level)
    }

    pub fn from_boxed(encoder: JsonEncoder, sink: Box<dyn Sink>, min_level: LogLevel) -> Self {
        Self {
            encoder,
            sink: Mutex::new(sink),
            min_level: Some(min_level),
            metrics: CoreMetrics::new(),
        }
    }

    /// A core that accepts no level at all
    pub fn disabled() -> Self {
        Self {
            encoder: JsonEncoder::default(),
            sink: Mutex::new(Box::new(NopSink)),
            min_level: None,
            metrics: CoreMetrics::new(),
        }
    }

    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.min_level.is_some_and(|min| level >= min)
    }

    /// `None` for a disabled core
    pub fn min_level(&self) -> Option<LogLevel> {
        self.min_level
    }

    pub fn encoder(&self) -> &JsonEncoder {
        &self.encoder
    }

    pub fn metrics(&self) -> &CoreMetrics {
        &self.metrics
    }

    pub fn sink_name(&self) -> String {
        self.sink.lock().name().to_string()
    }

    /// Encode and write one record; level filtering is the caller's job
    pub fn write(&self, record: &Record, fields: &Fields) -> Result<()> {
        let result = self
            .encoder
            .encode(record, fields)
            .and_then(|line| self.sink.lock().write(&line));

        if result.is_ok() {
            self.metrics.record_written();
        } else {
            self.metrics.record_failure();
        }
        result
    }

    /// Flush buffered output to the sink's stream
    pub fn sync(&self) -> Result<()> {
        self.sink.lock().flush()
    }
}

impl std::fmt::Debug for LogCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogCore")
            .field("encoder", &self.encoder)
            .field("sink", &self.sink_name())
            .field("min_level", &self.min_level)
            .finish()
    }
}
