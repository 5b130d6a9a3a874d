//! Configuration module for solid-demo
//!
//! Resolution order:
//! 1. CLI flags (highest priority)
//! 2. Config file passed with `--config`
//! 3. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{load_with_warnings, ConfigWarning};
pub use types::{Config, OutputConfig};
