//! Property tests for printers and the report printer.

use proptest::prelude::*;

use solid_demo::presentation::create_formatter;
use solid_demo::{
    ConsolePrinter, Formatter, FormatterKind, MemorySink, NetworkPrinter, Printer, ReportPrinter,
};

fn formatter_kind() -> impl Strategy<Value = FormatterKind> {
    prop::sample::select(FormatterKind::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: console printing writes the input verbatim.
    #[test]
    fn property_console_is_verbatim(data in "(?s).{0,256}") {
        let sink = MemorySink::new();
        ConsolePrinter.print(&data, &sink).unwrap();
        prop_assert_eq!(sink.lines(), vec![data]);
    }

    /// PROPERTY: network printing is the routing prefix followed by the input.
    #[test]
    fn property_network_is_prefixed(data in "(?s).{0,256}") {
        let sink = MemorySink::new();
        NetworkPrinter.print(&data, &sink).unwrap();
        prop_assert_eq!(sink.lines(), vec![format!("Sending to network printer: {}", data)]);
    }

    /// PROPERTY: report printer output equals format(data) for every formatter.
    #[test]
    fn property_report_printer_writes_format_output(
        kind in formatter_kind(),
        data in "(?s).{0,256}",
    ) {
        let formatter = create_formatter(kind);
        let sink = MemorySink::new();
        ReportPrinter::new(&*formatter).print(&data, &sink).unwrap();
        prop_assert_eq!(sink.lines(), vec![formatter.format(&data)]);
    }
}
