//! JSON record encoding
//!
//! Each record becomes one JSON object on one line. Keys are written in a
//! fixed order: level, time, caller, message, logger fields, record fields,
//! stack trace. Field keys are not deduplicated.

use super::error::Result;
use super::fields::{FieldValue, Fields};
use super::record::Record;
use super::timestamp::TimestampFormat;
use serde::Serialize;

/// Field names and time rendering used by the encoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderConfig {
    pub time_key: String,
    pub level_key: String,
    pub message_key: String,
    pub caller_key: String,
    pub stacktrace_key: String,
    pub timestamp_format: TimestampFormat,
}

impl EncoderConfig {
    /// Production defaults: `ts`, `level`, `msg`, `caller`, `stacktrace`, RFC 3339
    pub fn production() -> Self {
        Self {
            time_key: "ts".to_string(),
            level_key: "level".to_string(),
            message_key: "msg".to_string(),
            caller_key: "caller".to_string(),
            stacktrace_key: "stacktrace".to_string(),
            timestamp_format: TimestampFormat::Rfc3339,
        }
    }

    #[must_use]
    pub fn with_time_key(mut self, key: impl Into<String>) -> Self {
        self.time_key = key.into();
        self
    }

    #[must_use]
    pub fn with_level_key(mut self, key: impl Into<String>) -> Self {
        self.level_key = key.into();
        self
    }

    #[must_use]
    pub fn with_message_key(mut self, key: impl Into<String>) -> Self {
        self.message_key = key.into();
        self
    }

    #[must_use]
    pub fn with_caller_key(mut self, key: impl Into<String>) -> Self {
        self.caller_key = key.into();
        self
    }

    #[must_use]
    pub fn with_stacktrace_key(mut self, key: impl Into<String>) -> Self {
        self.stacktrace_key = key.into();
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self::production()
    }
}

/// Line-oriented JSON encoder
#[derive(Debug, Clone, Default)]
pub struct JsonEncoder {
    config: EncoderConfig,
}

impl JsonEncoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode `record` with the logger's static `fields`, newline included
    pub fn encode(&self, record: &Record, fields: &Fields) -> Result<Vec<u8>> {
        let cfg = &self.config;
        let mut obj = ObjectWriter::with_capacity(256);

        obj.entry(&cfg.level_key, record.level.as_str())?;
        obj.entry(
            &cfg.time_key,
            &cfg.timestamp_format.to_json_value(&record.timestamp),
        )?;
        if let Some(caller) = record.caller {
            obj.entry(&cfg.caller_key, &caller.to_string())?;
        }
        obj.entry(&cfg.message_key, &record.message)?;

        for (key, value) in fields.iter().chain(record.fields.iter()) {
            obj.field(key, value)?;
        }

        if let Some(ref stack) = record.stacktrace {
            obj.entry(&cfg.stacktrace_key, stack)?;
        }

        Ok(obj.finish())
    }
}

/// Writes `"key":value` pairs in order, allowing repeated keys
struct ObjectWriter {
    buf: Vec<u8>,
    first: bool,
}

impl ObjectWriter {
    fn with_capacity(capacity: usize) -> Self {
        let mut buf = Vec::with_capacity(capacity);
        buf.push(b'{');
        Self { buf, first: true }
    }

    fn entry<V: Serialize + ?Sized>(&mut self, key: &str, value: &V) -> Result<()> {
        if !self.first {
            self.buf.push(b',');
        }
        self.first = false;
        serde_json::to_writer(&mut self.buf, key)?;
        self.buf.push(b':');
        serde_json::to_writer(&mut self.buf, value)?;
        Ok(())
    }

    fn field(&mut self, key: &str, value: &FieldValue) -> Result<()> {
        self.entry(key, &value.to_json_value())
    }

    fn finish(mut self) -> Vec<u8> {
        self.buf.extend_from_slice(b"}\n");
        self.buf
    }
}
