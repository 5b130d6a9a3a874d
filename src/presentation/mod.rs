//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Choosing concrete variants and wiring them into the use case
//! - Diagnostic logging setup
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates the use case and sinks (dependency injection)
//! - `logging` - `tracing` subscriber on stderr

pub mod cli;
pub mod factory;
pub mod logging;

pub use cli::Cli;
pub use factory::{create_demo, create_formatter, create_sink};
