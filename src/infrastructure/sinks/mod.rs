//! Output sink implementations

mod json;
mod memory;
mod text;

pub use json::JsonLinesSink;
pub use memory::MemorySink;
pub use text::TextSink;
