//! Domain layer for the call-site resolver.
//!
//! Contains the canonical types shared across all modules:
//! - `LogRecord`: The pipeline's core data type
//! - `Severity`: Ordered log severity (Debug through Emergency)

pub mod record;
pub mod severity;

pub use record::LogRecord;
pub use severity::Severity;
