//! Output format value object - selects which `OutputSink` the binary uses

use serde::{Deserialize, Serialize};

/// How printed lines reach stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One plain line per print
    #[default]
    Text,
    /// One NDJSON event per print
    Json,
}
