//! Standard output sink

use crate::core::{LoggerError, Result, Sink};
use std::io::{self, Write};

/// Writes each record straight to the process's standard output
///
/// Records are written under the stdout lock so lines from different loggers
/// never interleave mid-record.
pub struct StdoutSink {
    out: io::Stdout,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for StdoutSink {
    fn write(&mut self, line: &[u8]) -> Result<()> {
        self.out
            .lock()
            .write_all(line)
            .map_err(|e| LoggerError::io_operation("writing record", "stdout", e))
    }

    fn flush(&mut self) -> Result<()> {
        self.out
            .flush()
            .map_err(|e| LoggerError::io_operation("flushing sink", "stdout", e))
    }

    fn name(&self) -> &str {
        "stdout"
    }
}
