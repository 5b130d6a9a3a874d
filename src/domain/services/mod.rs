//! Domain Services
//!
//! - `ReportPrinter` - Formats through an injected `Formatter`, then prints

mod report_printer;

pub use report_printer::ReportPrinter;
