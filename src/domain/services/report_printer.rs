//! Report Printer
//!
//! Depends only on the `Formatter` port. The caller picks the concrete
//! formatter and keeps ownership of it.

use crate::domain::ports::{Formatter, OutputSink, Printer};
use crate::error::DemoResult;

/// Formats data with an injected formatter and writes the result
#[derive(Clone, Copy)]
pub struct ReportPrinter<'a> {
    formatter: &'a dyn Formatter,
}

impl<'a> ReportPrinter<'a> {
    pub fn new(formatter: &'a dyn Formatter) -> Self {
        Self { formatter }
    }

    /// The formatted line `print` would write for `data`
    pub fn render(&self, data: &str) -> String {
        self.formatter.format(data)
    }
}

impl Printer for ReportPrinter<'_> {
    fn print(&self, data: &str, sink: &dyn OutputSink) -> DemoResult<()> {
        let line = self.render(data);
        tracing::trace!(input = data, output = %line, "formatted report line");
        sink.write_line(&line)
    }
}

impl std::fmt::Debug for ReportPrinter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportPrinter").finish_non_exhaustive()
    }
}
