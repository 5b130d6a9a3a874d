//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod formatter;
pub mod office;
pub mod output_sink;
pub mod printer;

pub use formatter::Formatter;
pub use office::{Fax, Scanner};
pub use output_sink::OutputSink;
pub use printer::Printer;
