//! Structured logging engine: levels, records, encoding, sinks and loggers

pub mod encoder;
pub mod error;
pub mod fields;
pub mod global;
pub mod log_core;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod record;
pub mod record_builder;
pub mod sink;
pub mod timestamp;

pub use encoder::{EncoderConfig, JsonEncoder};
pub use error::{LoggerError, Result};
pub use fields::{FieldValue, Fields};
pub use global::{global, replace_global};
pub use log_core::LogCore;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::CoreMetrics;
pub use record::{Caller, Record};
pub use record_builder::RecordBuilder;
pub use sink::{NopSink, Sink};
pub use timestamp::TimestampFormat;
