//! solid-demo - the five SOLID design principles expressed with traits
//!
//! - Single Responsibility: [`Report`] only produces content
//! - Open/Closed: new [`Formatter`] variants need no caller changes
//! - Liskov Substitution: every [`Printer`] is interchangeable
//! - Interface Segregation: [`Scanner`] and [`Fax`] are separate traits
//! - Dependency Inversion: [`ReportPrinter`] borrows any [`Formatter`]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DemoSummary, SolidDemo};
pub use config::Config;
pub use domain::entities::{Report, REPORT_DATA};
pub use domain::ports::{Fax, Formatter, OutputSink, Printer, Scanner};
pub use domain::services::ReportPrinter;
pub use domain::value_objects::{FormatterKind, OutputFormat};
pub use error::{DemoError, DemoResult};
pub use infrastructure::{
    ConsolePrinter, HtmlFormatter, JsonLinesSink, MemorySink, MultiFunctionPrinter,
    NetworkPrinter, PdfFormatter, PlainFormatter, TextSink,
};
