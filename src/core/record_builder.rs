//! Record builder for fluent per-record field attachment

use super::fields::{FieldValue, Fields};
use super::log_level::LogLevel;
use super::logger::Logger;
use super::record::Caller;

/// Builder for a single structured record
///
/// The caller location is taken where the builder is created.
///
/// # Example
///
/// ```
/// use service_logger::prelude::*;
///
/// let logger = Logger::nop();
///
/// logger.info_builder()
///     .message("Request processed")
///     .field("user_id", 12345)
///     .field("latency_ms", 42.5)
///     .field("status", 200)
///     .log();
/// ```
pub struct RecordBuilder<'a> {
    logger: &'a Logger,
    level: LogLevel,
    message: String,
    fields: Fields,
    caller: Caller,
}

impl<'a> RecordBuilder<'a> {
    #[track_caller]
    pub fn new(logger: &'a Logger, level: LogLevel) -> Self {
        Self {
            logger,
            level,
            message: String::new(),
            fields: Fields::new(),
            caller: Caller::here(),
        }
    }

    /// Set the log message
    #[must_use]
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        self.message = msg.into();
        self
    }

    /// Add a structured field to the record
    #[must_use]
    pub fn field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.push(key, value);
        self
    }

    /// Add every field of `fields`
    #[must_use]
    pub fn fields(mut self, fields: &Fields) -> Self {
        self.fields.extend_from(fields);
        self
    }

    /// Override the recorded source location
    #[must_use]
    pub fn location(mut self, file: &'static str, line: u32) -> Self {
        self.caller = Caller::new(file, line);
        self
    }

    /// Build and send the record
    pub fn log(self) {
        self.logger
            .emit(self.level, self.message, self.fields, self.caller);
    }
}

impl Logger {
    #[track_caller]
    pub fn trace_builder(&self) -> RecordBuilder<'_> {
        RecordBuilder::new(self, LogLevel::Trace)
    }

    #[track_caller]
    pub fn debug_builder(&self) -> RecordBuilder<'_> {
        RecordBuilder::new(self, LogLevel::Debug)
    }

    /// Create an info-level record builder
    ///
    /// # Example
    ///
    /// ```
    /// use service_logger::Logger;
    ///
    /// let logger = Logger::nop();
    /// logger.info_builder()
    ///     .message("cache warmed")
    ///     .field("entries", 1024)
    ///     .log();
    /// ```
    #[track_caller]
    pub fn info_builder(&self) -> RecordBuilder<'_> {
        RecordBuilder::new(self, LogLevel::Info)
    }

    #[track_caller]
    pub fn warn_builder(&self) -> RecordBuilder<'_> {
        RecordBuilder::new(self, LogLevel::Warn)
    }

    #[track_caller]
    pub fn error_builder(&self) -> RecordBuilder<'_> {
        RecordBuilder::new(self, LogLevel::Error)
    }

    #[track_caller]
    pub fn fatal_builder(&self) -> RecordBuilder<'_> {
        RecordBuilder::new(self, LogLevel::Fatal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::encoder::JsonEncoder;
    use crate::core::log_core::LogCore;
    use crate::sinks::MemorySink;

    #[test]
    fn test_builder_fields_and_location() {
        let sink = MemorySink::new();
        let core = LogCore::new(JsonEncoder::default(), sink.clone(), LogLevel::Debug);
        let logger = Logger::builder(core).add_caller(true).build();

        logger
            .debug_builder()
            .message("query done")
            .field("rows", 3)
            .fields(&Fields::new().with("table", "orders"))
            .location("src/db.rs", 88)
            .log();

        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["msg"], "query done");
        assert_eq!(records[0]["rows"], 3);
        assert_eq!(records[0]["table"], "orders");
        assert_eq!(records[0]["caller"], "src/db.rs:88");
    }

    #[test]
    fn test_builder_captures_creation_site() {
        let sink = MemorySink::new();
        let core = LogCore::new(JsonEncoder::default(), sink.clone(), LogLevel::Info);
        let logger = Logger::builder(core).add_caller(true).build();

        let expected_line = line!() + 1;
        logger.warn_builder().message("slow").log();

        let caller = sink.records()[0]["caller"].as_str().unwrap().to_string();
        assert!(caller.ends_with(&format!("record_builder.rs:{}", expected_line)));
    }

    #[test]
    fn test_builder_below_level_is_dropped() {
        let sink = MemorySink::new();
        let core = LogCore::new(JsonEncoder::default(), sink.clone(), LogLevel::Error);
        let logger = Logger::builder(core).build();

        logger.info_builder().message("ignored").log();
        assert!(sink.lines().is_empty());
    }
}
