//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! ## Structure
//!
//! - `formatters` - `Formatter` variants (PDF, plain, HTML)
//! - `printers` - `Printer` variants (console, network)
//! - `office` - `MultiFunctionPrinter` (Scanner + Fax)
//! - `sinks/` - `OutputSink` implementations (text, NDJSON, memory)

pub mod formatters;
pub mod office;
pub mod printers;
pub mod sinks;

// Re-export for convenience
pub use formatters::{HtmlFormatter, PdfFormatter, PlainFormatter};
pub use office::MultiFunctionPrinter;
pub use printers::{ConsolePrinter, NetworkPrinter};
pub use sinks::{JsonLinesSink, MemorySink, TextSink};
