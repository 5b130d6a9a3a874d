//! Output Sink Port
//!
//! Everything the demo prints goes through this trait, so the same
//! printers can target stdout, an NDJSON stream, or an in-memory recorder.

use crate::error::DemoResult;

/// Destination for printed lines
///
/// Implementations:
/// - `TextSink` - plain lines to stdout (or any writer)
/// - `JsonLinesSink` - NDJSON events to stdout (or any writer)
/// - `MemorySink` - records lines for tests
pub trait OutputSink {
    /// Write a single line; the sink adds its own terminator
    fn write_line(&self, line: &str) -> DemoResult<()>;
}

impl<S: OutputSink + ?Sized> OutputSink for &S {
    fn write_line(&self, line: &str) -> DemoResult<()> {
        (**self).write_line(line)
    }
}

impl<S: OutputSink + ?Sized> OutputSink for Box<S> {
    fn write_line(&self, line: &str) -> DemoResult<()> {
        (**self).write_line(line)
    }
}
