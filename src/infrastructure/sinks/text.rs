//! Plain text sink
//!
//! Writes each line followed by `\n`. This is what the binary uses by default.

use crate::domain::ports::OutputSink;
use crate::error::DemoResult;
use std::io::{self, Write};
use std::sync::Mutex;

/// Sink that writes plain lines to stdout (or a custom writer)
pub struct TextSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl TextSink {
    /// Create a sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl OutputSink for TextSink {
    fn write_line(&self, line: &str) -> DemoResult<()> {
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        Ok(())
    }
}
