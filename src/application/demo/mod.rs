//! Demo use case module

mod result;
mod use_case;

pub use result::DemoSummary;
pub use use_case::{SolidDemo, NETWORK_JOB};
