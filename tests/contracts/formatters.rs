//! Formatter contracts
//!
//! `ReportPrinter` output is exactly `format(data)` for every formatter,
//! including ones defined outside the crate.

use solid_demo::presentation::create_formatter;
use solid_demo::{Formatter, FormatterKind, MemorySink, Printer, ReportPrinter};

/// A formatter the library has never seen
struct ShoutFormatter;

impl Formatter for ShoutFormatter {
    fn format(&self, data: &str) -> String {
        format!("{}!", data.to_uppercase())
    }
}

/// CONTRACT: report printer writes format(data) verbatim
#[test]
fn contract_report_printer_writes_formatted_data() {
    let mut formatters: Vec<Box<dyn Formatter>> = FormatterKind::ALL
        .iter()
        .map(|kind| create_formatter(*kind))
        .collect();
    formatters.push(Box::new(ShoutFormatter));

    for formatter in &formatters {
        let sink = MemorySink::new();
        ReportPrinter::new(&**formatter)
            .print("Report Data", &sink)
            .unwrap();
        assert_eq!(sink.lines(), vec![formatter.format("Report Data")]);
    }
}

/// CONTRACT: external formatters plug in without library changes
#[test]
fn contract_external_formatter_is_injectable() {
    let formatter = ShoutFormatter;
    let sink = MemorySink::new();

    ReportPrinter::new(&formatter).print("hi", &sink).unwrap();

    assert_eq!(sink.lines(), vec!["HI!"]);
}
