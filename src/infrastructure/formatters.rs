//! Formatter variants

use crate::domain::ports::Formatter;

/// Tag prepended by [`PdfFormatter`]
pub const PDF_TAG: &str = "PDF: ";

/// Prefixes data with [`PDF_TAG`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PdfFormatter;

impl Formatter for PdfFormatter {
    fn format(&self, data: &str) -> String {
        format!("{}{}", PDF_TAG, data)
    }
}

/// Returns data unchanged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlainFormatter;

impl Formatter for PlainFormatter {
    fn format(&self, data: &str) -> String {
        data.to_string()
    }
}

/// Wraps data in a `<p>` element. No escaping is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HtmlFormatter;

impl Formatter for HtmlFormatter {
    fn format(&self, data: &str) -> String {
        format!("<p>{}</p>", data)
    }
}
