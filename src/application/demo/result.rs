//! Demo result types

/// Outcome of a demo run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DemoSummary {
    /// Number of lines the sink accepted
    pub lines_written: usize,
}
