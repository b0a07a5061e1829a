//! Sinks over arbitrary writers and in-memory buffers

use crate::core::{Result, Sink};
use parking_lot::Mutex;
use std::io::{BufWriter, Write};
use std::sync::Arc;

/// Buffered sink over any `Write` implementation
pub struct WriterSink<W: Write + Send> {
    writer: BufWriter<W>,
    name: String,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            name: "writer".to_string(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write(&mut self, line: &[u8]) -> Result<()> {
        self.writer.write_all(line)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Shared in-memory sink
///
/// Clones share one buffer, so a handle kept by the caller sees everything
/// written through the copy handed to a logger.
///
/// # Example
///
/// ```
/// use service_logger::core::{LogCore, Logger, LogLevel, JsonEncoder};
/// use service_logger::sinks::MemorySink;
///
/// let sink = MemorySink::new();
/// let core = LogCore::new(JsonEncoder::default(), sink.clone(), LogLevel::Info);
/// let logger = Logger::builder(core).build();
///
/// logger.info("ready");
/// assert_eq!(sink.lines().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    /// Each line parsed as JSON; lines that fail to parse are skipped
    pub fn records(&self) -> Vec<serde_json::Value> {
        self.lines()
            .iter()
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect()
    }

    pub fn clear(&self) {
        self.buf.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write(&mut self, line: &[u8]) -> Result<()> {
        self.buf.lock().extend_from_slice(line);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
