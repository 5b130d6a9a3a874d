//! Formatter kind value object - selects which `Formatter` gets injected

use serde::{Deserialize, Serialize};

/// Formatter variant chosen from the CLI or config
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum FormatterKind {
    /// Prefix with "PDF: "
    #[default]
    Pdf,
    /// Leave the data unchanged
    Plain,
    /// Wrap in a paragraph tag
    Html,
}

impl FormatterKind {
    pub const ALL: [FormatterKind; 3] = [
        FormatterKind::Pdf,
        FormatterKind::Plain,
        FormatterKind::Html,
    ];

    /// Name used in config files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatterKind::Pdf => "pdf",
            FormatterKind::Plain => "plain",
            FormatterKind::Html => "html",
        }
    }
}

impl std::fmt::Display for FormatterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
