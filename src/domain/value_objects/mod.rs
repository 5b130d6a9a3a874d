//! Domain Value Objects
//!
//! Small enums that select variants at the composition root.

mod formatter_kind;
mod output_format;

pub use formatter_kind::FormatterKind;
pub use output_format::OutputFormat;
