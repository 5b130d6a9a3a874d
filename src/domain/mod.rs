//! Domain Layer
//!
//! The capability contracts and the types that only depend on them.
//!
//! ## Structure
//!
//! - `entities/` - Report content
//! - `value_objects/` - Small enums selected from config or the CLI
//! - `services/` - `ReportPrinter`, which depends only on the `Formatter` port
//! - `ports/` - Trait definitions (`Formatter`, `Printer`, `Scanner`, `Fax`, `OutputSink`)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Every write goes through an `OutputSink`
//! 2. **Ports & Adapters** - Concrete variants live in `infrastructure/`

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
