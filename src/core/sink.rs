//! Sink trait for encoded record destinations

use super::error::Result;

/// Destination for encoded records
///
/// `write` receives one complete line per call. Implementations may buffer;
/// `flush` pushes buffered bytes to the underlying stream.
pub trait Sink: Send {
    fn write(&mut self, line: &[u8]) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

/// Sink that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NopSink;

impl Sink for NopSink {
    fn write(&mut self, _line: &[u8]) -> Result<()> {
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "nop"
    }
}
