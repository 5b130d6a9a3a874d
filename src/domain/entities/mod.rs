//! Domain Entities
//!
//! - `Report` - Produces the report content and nothing else

mod report;

pub use report::{Report, REPORT_DATA};
