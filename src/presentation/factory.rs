//! Use Case Factory
//!
//! Creates the demo with concrete variants wired in.
//! This is the dependency injection point for the application.

use crate::application::SolidDemo;
use crate::config::Config;
use crate::domain::ports::{Formatter, OutputSink};
use crate::domain::value_objects::{FormatterKind, OutputFormat};
use crate::infrastructure::{
    HtmlFormatter, JsonLinesSink, MultiFunctionPrinter, NetworkPrinter, PdfFormatter,
    PlainFormatter, TextSink,
};

/// Type alias for the demo with its default printer and device
pub type ConcreteSolidDemo = SolidDemo<NetworkPrinter, MultiFunctionPrinter>;

/// Create the formatter for a kind
pub fn create_formatter(kind: FormatterKind) -> Box<dyn Formatter> {
    match kind {
        FormatterKind::Pdf => Box::new(PdfFormatter),
        FormatterKind::Plain => Box::new(PlainFormatter),
        FormatterKind::Html => Box::new(HtmlFormatter),
    }
}

/// Create the stdout sink for an output format
pub fn create_sink(format: OutputFormat) -> Box<dyn OutputSink> {
    match format {
        OutputFormat::Text => Box::new(TextSink::stdout()),
        OutputFormat::Json => Box::new(JsonLinesSink::stdout()),
    }
}

/// Create the demo use case from resolved configuration
pub fn create_demo(config: &Config) -> ConcreteSolidDemo {
    SolidDemo::new(
        create_formatter(config.formatter),
        NetworkPrinter,
        MultiFunctionPrinter,
    )
}
