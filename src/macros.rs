//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. The recorded
//! caller is the macro invocation site.
//!
//! # Examples
//!
//! ```
//! use service_logger::prelude::*;
//! use service_logger::info;
//!
//! let logger = Logger::nop();
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at the given level with automatic formatting.
///
/// # Examples
///
/// ```
/// # use service_logger::prelude::*;
/// # let logger = Logger::nop();
/// use service_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use service_logger::prelude::*;
/// # let logger = Logger::nop();
/// use service_logger::info;
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use service_logger::prelude::*;
/// # let logger = Logger::nop();
/// use service_logger::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message. The process keeps running.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{JsonEncoder, LogCore, LogLevel, Logger};
    use crate::sinks::MemorySink;

    fn memory_logger() -> (Logger, MemorySink) {
        let sink = MemorySink::new();
        let core = LogCore::new(JsonEncoder::default(), sink.clone(), LogLevel::Trace);
        (Logger::builder(core).add_caller(true).build(), sink)
    }

    #[test]
    fn test_log_macro() {
        let (logger, sink) = memory_logger();
        log!(logger, LogLevel::Info, "Formatted: {}", 42);

        let records = sink.records();
        assert_eq!(records[0]["msg"], "Formatted: 42");
        assert_eq!(records[0]["level"], "info");
    }

    #[test]
    fn test_level_macros() {
        let (logger, sink) = memory_logger();
        trace!(logger, "t {}", 1);
        debug!(logger, "d {}", 2);
        info!(logger, "i {}", 3);
        warn!(logger, "w {}", 4);
        error!(logger, "e {}", 5);
        fatal!(logger, "f {}", 6);

        let levels: Vec<String> = sink
            .records()
            .iter()
            .map(|r| r["level"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(levels, vec!["trace", "debug", "info", "warn", "error", "fatal"]);
    }

    #[test]
    fn test_macro_caller_is_invocation_site() {
        let (logger, sink) = memory_logger();

        let expected_line = line!() + 1;
        info!(logger, "here");

        let caller = sink.records()[0]["caller"].as_str().unwrap().to_string();
        assert!(caller.ends_with(&format!("macros.rs:{}", expected_line)), "{}", caller);
    }
}
