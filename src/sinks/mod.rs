//! Sink implementations

pub mod stdout;
pub mod writer;

pub use stdout::StdoutSink;
pub use writer::{MemorySink, WriterSink};

pub use crate::core::{NopSink, Sink};
