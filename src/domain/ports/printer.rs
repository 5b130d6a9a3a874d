//! Printer Port
//!
//! Every printer accepts the same input and writes exactly one line before
//! returning, so callers can hold any of them as `&dyn Printer`.

use super::OutputSink;
use crate::error::DemoResult;

/// Printing capability
pub trait Printer {
    /// Write `data` (possibly decorated) to `sink` as one line
    fn print(&self, data: &str, sink: &dyn OutputSink) -> DemoResult<()>;
}
