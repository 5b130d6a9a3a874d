//! SOLID Demo Use Case
//!
//! Runs the walkthrough in a fixed order:
//! 1. Report content formatted through the injected formatter
//! 2. A print job sent to the substitutable printer
//! 3. A scan, then a fax, on the multi-function device
//!
//! The use case never names a concrete variant; the presentation factory
//! picks them.

use std::cell::Cell;

use crate::domain::entities::Report;
use crate::domain::ports::{Fax, Formatter, OutputSink, Printer, Scanner};
use crate::domain::services::ReportPrinter;
use crate::error::DemoResult;

use super::result::DemoSummary;

/// Data sent to the printer in step 2
pub const NETWORK_JOB: &str = "Network printing...";

/// Demo use case, parameterized by its ports
pub struct SolidDemo<P, D>
where
    P: Printer,
    D: Scanner + Fax,
{
    formatter: Box<dyn Formatter>,
    printer: P,
    device: D,
}

impl<P, D> SolidDemo<P, D>
where
    P: Printer,
    D: Scanner + Fax,
{
    pub fn new(formatter: Box<dyn Formatter>, printer: P, device: D) -> Self {
        Self {
            formatter,
            printer,
            device,
        }
    }

    /// Run every step against `sink`
    pub fn run(&self, sink: &dyn OutputSink) -> DemoResult<DemoSummary> {
        let counting = CountingSink::new(sink);

        let report = Report::new();
        tracing::debug!(step = "single-responsibility", "reading report data");
        let report_printer = ReportPrinter::new(&*self.formatter);
        tracing::debug!(step = "dependency-inversion", "printing report");
        report_printer.print(report.report_data(), &counting)?;

        tracing::debug!(step = "liskov-substitution", "sending print job");
        self.printer.print(NETWORK_JOB, &counting)?;

        tracing::debug!(step = "interface-segregation", "scanning and faxing");
        scan_with(&self.device, &counting)?;
        fax_with(&self.device, &counting)?;

        let summary = DemoSummary {
            lines_written: counting.count(),
        };
        tracing::info!(lines = summary.lines_written, "demo complete");
        Ok(summary)
    }
}

// Each helper sees only the capability it needs.
fn scan_with(scanner: &dyn Scanner, sink: &dyn OutputSink) -> DemoResult<()> {
    scanner.scan(sink)
}

fn fax_with(fax: &dyn Fax, sink: &dyn OutputSink) -> DemoResult<()> {
    fax.fax(sink)
}

struct CountingSink<'a> {
    inner: &'a dyn OutputSink,
    count: Cell<usize>,
}

impl<'a> CountingSink<'a> {
    fn new(inner: &'a dyn OutputSink) -> Self {
        Self {
            inner,
            count: Cell::new(0),
        }
    }

    fn count(&self) -> usize {
        self.count.get()
    }
}

impl OutputSink for CountingSink<'_> {
    fn write_line(&self, line: &str) -> DemoResult<()> {
        self.inner.write_line(line)?;
        self.count.set(self.count.get() + 1);
        Ok(())
    }
}
