//! Printer variants
//!
//! Both variants write exactly one line and return, so they are
//! interchangeable behind `&dyn Printer`.

use crate::domain::ports::{OutputSink, Printer};
use crate::error::DemoResult;

/// Prefix written by [`NetworkPrinter`]
pub const NETWORK_PREFIX: &str = "Sending to network printer: ";

/// Writes data verbatim
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsolePrinter;

impl Printer for ConsolePrinter {
    fn print(&self, data: &str, sink: &dyn OutputSink) -> DemoResult<()> {
        sink.write_line(data)
    }
}

/// Writes data with a routing prefix
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetworkPrinter;

impl Printer for NetworkPrinter {
    fn print(&self, data: &str, sink: &dyn OutputSink) -> DemoResult<()> {
        tracing::trace!(data, "routing to network printer");
        sink.write_line(&format!("{}{}", NETWORK_PREFIX, data))
    }
}
