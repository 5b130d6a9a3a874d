//! Scanner and Fax Ports
//!
//! Two separate single-operation traits. A consumer that only scans takes
//! `&dyn Scanner` and never sees `fax`.

use super::OutputSink;
use crate::error::DemoResult;

/// Scanning capability
pub trait Scanner {
    fn scan(&self, sink: &dyn OutputSink) -> DemoResult<()>;
}

/// Fax capability
pub trait Fax {
    fn fax(&self, sink: &dyn OutputSink) -> DemoResult<()>;
}
