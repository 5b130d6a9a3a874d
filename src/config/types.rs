//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DemoResult;

pub use crate::domain::value_objects::{FormatterKind, OutputFormat};

use super::loader::{self, ConfigWarning};

/// Output configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Top-level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Formatter injected into the report printer
    #[serde(default)]
    pub formatter: FormatterKind,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration and report unknown keys
    pub fn load_with_warnings(path: &Path) -> DemoResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply CLI overrides on top of the loaded values
    pub fn with_overrides(mut self, formatter: Option<FormatterKind>, json: bool) -> Self {
        if let Some(kind) = formatter {
            self.formatter = kind;
        }
        if json {
            self.output.format = OutputFormat::Json;
        }
        self
    }
}
