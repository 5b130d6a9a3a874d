//! Application Layer
//!
//! Use cases that orchestrate the domain types against injected ports.
//!
//! ## Use Cases
//!
//! - `SolidDemo` - Runs the five-principle walkthrough against any `OutputSink`

pub mod demo;

pub use demo::{DemoSummary, SolidDemo, NETWORK_JOB};
