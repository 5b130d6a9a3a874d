//! Formatter Port
//!
//! String-to-string transformation used by `ReportPrinter`. New formats are
//! added as new implementations; callers never change.

/// Formatting capability
///
/// Any `Fn(&str) -> String` closure is also a `Formatter`.
pub trait Formatter {
    /// Produce the formatted form of `data`
    fn format(&self, data: &str) -> String;
}

impl<F> Formatter for F
where
    F: Fn(&str) -> String,
{
    fn format(&self, data: &str) -> String {
        self(data)
    }
}
