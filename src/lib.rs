//! # Service Logger
//!
//! A structured-logging facade with fixed conventions: one JSON object per
//! line on stdout, RFC 3339 timestamps, stable field names, caller capture,
//! and stack traces on error.
//!
//! ## Features
//!
//! - **One-call setup**: [`init`] turns level, service and env strings into a
//!   configured logger, with `LOG_LEVEL` and built-in defaults as fallbacks
//! - **Module loggers**: [`module_logger`] tags every record with a `module` field
//! - **Safe shutdown**: [`sync`] flushes and ignores a closed stdout
//! - **Small engine**: the [`core`] module exposes the encoder, sinks and
//!   loggers the facade is built from

pub mod core;
pub mod facade;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        CoreMetrics, EncoderConfig, FieldValue, Fields, JsonEncoder, LogCore, LogLevel, Logger,
        LoggerBuilder, LoggerError, RecordBuilder, Result, Sink, TimestampFormat,
    };
    pub use crate::facade::{FacadeConfig, LoggerFacade, ServiceIdentity};
    pub use crate::sinks::{MemorySink, StdoutSink, WriterSink};
}

pub use crate::core::{
    CoreMetrics, EncoderConfig, FieldValue, Fields, JsonEncoder, LogCore, LogLevel, Logger,
    LoggerBuilder, LoggerError, RecordBuilder, Result, Sink, TimestampFormat,
};
pub use facade::{
    identity, init, init_from, module_logger, sync, FacadeConfig, LoggerFacade, ServiceIdentity,
};
pub use sinks::{MemorySink, StdoutSink, WriterSink};
