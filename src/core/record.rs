//! Log record structure

use super::fields::Fields;
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use std::fmt;
use std::panic::Location;

/// Source location of the call that produced a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub file: &'static str,
    pub line: u32,
}

impl Caller {
    pub fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Location of the outermost `#[track_caller]` frame
    #[track_caller]
    pub fn here() -> Self {
        Self::from(Location::caller())
    }
}

impl From<&'static Location<'static>> for Caller {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// A single entry on its way to the encoder
///
/// Logger-level fields are not copied in; the core passes them to the encoder
/// next to the record.
#[derive(Debug, Clone)]
pub struct Record {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub caller: Option<Caller>,
    pub fields: Fields,
    pub stacktrace: Option<String>,
}

impl Record {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Utc::now(),
            caller: None,
            fields: Fields::new(),
            stacktrace: None,
        }
    }

    #[must_use]
    pub fn with_caller(mut self, caller: Caller) -> Self {
        self.caller = Some(caller);
        self
    }

    #[must_use]
    pub fn with_fields(mut self, fields: Fields) -> Self {
        self.fields = fields;
        self
    }

    #[must_use]
    pub fn with_stacktrace(mut self, stacktrace: String) -> Self {
        self.stacktrace = Some(stacktrace);
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_display() {
        let caller = Caller::new("src/http/server.rs", 42);
        assert_eq!(caller.to_string(), "src/http/server.rs:42");
    }

    #[test]
    fn test_caller_here_points_at_this_file() {
        let caller = Caller::here();
        assert!(caller.file.ends_with("record.rs"));
        assert!(caller.line > 0);
    }

    #[test]
    fn test_record_defaults() {
        let record = Record::new(LogLevel::Warn, "disk almost full");

        assert_eq!(record.level, LogLevel::Warn);
        assert_eq!(record.message, "disk almost full");
        assert!(record.caller.is_none());
        assert!(record.fields.is_empty());
        assert!(record.stacktrace.is_none());

        let age = Utc::now().signed_duration_since(record.timestamp);
        assert!(age.num_seconds() <= 1);
    }
}
