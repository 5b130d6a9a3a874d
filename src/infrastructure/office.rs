//! Multi-function device implementing both `Scanner` and `Fax`

use crate::domain::ports::{Fax, OutputSink, Scanner};
use crate::error::DemoResult;

pub const SCAN_MESSAGE: &str = "Scanning document...";
pub const FAX_MESSAGE: &str = "Faxing document...";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MultiFunctionPrinter;

impl Scanner for MultiFunctionPrinter {
    fn scan(&self, sink: &dyn OutputSink) -> DemoResult<()> {
        sink.write_line(SCAN_MESSAGE)
    }
}

impl Fax for MultiFunctionPrinter {
    fn fax(&self, sink: &dyn OutputSink) -> DemoResult<()> {
        sink.write_line(FAX_MESSAGE)
    }
}
