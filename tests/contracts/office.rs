//! Scanner and Fax contracts
//!
//! Consumers take the narrowest trait they need. A scan-only device never
//! has to implement `Fax`.

use solid_demo::{DemoResult, Fax, MemorySink, MultiFunctionPrinter, OutputSink, Scanner};

/// A device that can only scan
struct FlatbedScanner;

impl Scanner for FlatbedScanner {
    fn scan(&self, sink: &dyn OutputSink) -> DemoResult<()> {
        sink.write_line("Flatbed scanning...")
    }
}

fn digitize(scanner: &dyn Scanner, sink: &dyn OutputSink) -> DemoResult<()> {
    scanner.scan(sink)
}

/// CONTRACT: scan-only consumers accept scan-only devices
#[test]
fn contract_scanner_consumer_accepts_any_scanner() {
    let sink = MemorySink::new();

    digitize(&FlatbedScanner, &sink).unwrap();
    digitize(&MultiFunctionPrinter, &sink).unwrap();

    assert_eq!(
        sink.lines(),
        vec!["Flatbed scanning...", "Scanning document..."]
    );
}

/// CONTRACT: scan and fax are independent of each other and of order
#[test]
fn contract_scan_and_fax_are_independent() {
    let device = MultiFunctionPrinter;

    let scan_first = MemorySink::new();
    device.scan(&scan_first).unwrap();
    device.fax(&scan_first).unwrap();

    let fax_first = MemorySink::new();
    device.fax(&fax_first).unwrap();
    device.scan(&fax_first).unwrap();

    let mut a = scan_first.lines();
    let mut b = fax_first.lines();
    a.sort();
    b.sort();
    assert_eq!(a, b);
    assert_eq!(a.len(), 2);
}
