//! JSON Lines Sink
//!
//! Outputs each printed line as an NDJSON event for scripting.

use crate::domain::ports::OutputSink;
use crate::error::DemoResult;
use serde::Serialize;
use std::io::{self, Write};
use std::sync::Mutex;

#[derive(Serialize)]
struct LineEvent<'a> {
    event: &'static str,
    index: usize,
    text: &'a str,
}

struct State {
    writer: Box<dyn Write + Send>,
    next_index: usize,
}

/// Sink that writes `{"event":"line","index":N,"text":"..."}` per line
pub struct JsonLinesSink {
    state: Mutex<State>,
}

impl JsonLinesSink {
    /// Create a JSON sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            state: Mutex::new(State {
                writer: Box::new(writer),
                next_index: 0,
            }),
        }
    }
}

impl OutputSink for JsonLinesSink {
    fn write_line(&self, line: &str) -> DemoResult<()> {
        let mut state = self
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let event = LineEvent {
            event: "line",
            index: state.next_index,
            text: line,
        };
        let json = serde_json::to_string(&event)?;
        writeln!(state.writer, "{}", json)?;
        state.writer.flush()?;
        state.next_index += 1;
        Ok(())
    }
}
