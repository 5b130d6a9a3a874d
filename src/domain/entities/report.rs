//! Report entity
//!
//! A report only knows its own content. Formatting and printing belong to
//! other types.

/// Content returned by [`Report::report_data`]
pub const REPORT_DATA: &str = "Report Data";

/// Report content holder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Report;

impl Report {
    pub fn new() -> Self {
        Self
    }

    /// The report's content
    pub fn report_data(&self) -> &'static str {
        REPORT_DATA
    }
}
