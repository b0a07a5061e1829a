//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Level string that names no known severity
    #[error("invalid log level {level:?}")]
    InvalidLevel { level: String },

    /// IO error with context
    #[error("IO error while {operation} on {message}: {source}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an invalid level error
    pub fn invalid_level(level: impl Into<String>) -> Self {
        LoggerError::InvalidLevel {
            level: level.into(),
        }
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }

    /// The underlying IO error, if this error came from a sink
    pub fn io_error(&self) -> Option<&std::io::Error> {
        match self {
            LoggerError::Io(source) | LoggerError::IoOperation { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Whether the reader on the other end of the sink has gone away
    pub fn is_broken_pipe(&self) -> bool {
        self.io_error()
            .is_some_and(|e| e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display() {
        let err = LoggerError::invalid_level("loud");
        assert_eq!(err.to_string(), "invalid log level \"loud\"");

        let err = LoggerError::other("something odd");
        assert_eq!(err.to_string(), "something odd");
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("flushing sink", "stdout", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert_eq!(
            err.to_string(),
            "IO error while flushing sink on stdout: access denied"
        );
        assert_eq!(
            err.io_error().map(io::Error::kind),
            Some(io::ErrorKind::PermissionDenied)
        );
    }

    #[test]
    fn test_broken_pipe_detection() {
        let direct = LoggerError::from(io::Error::from(io::ErrorKind::BrokenPipe));
        assert!(direct.is_broken_pipe());

        let wrapped = LoggerError::io_operation(
            "flushing sink",
            "stdout",
            io::Error::from(io::ErrorKind::BrokenPipe),
        );
        assert!(wrapped.is_broken_pipe());

        let other = LoggerError::from(io::Error::from(io::ErrorKind::WriteZero));
        assert!(!other.is_broken_pipe());
        assert!(!LoggerError::invalid_level("x").is_broken_pipe());
    }
}
