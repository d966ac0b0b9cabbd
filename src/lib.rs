//! Call-site introspection for structured log pipelines.
//!
//! For each record that meets a severity threshold, `CallSiteResolver`
//! inspects the active call stack and attaches the true calling
//! file/line/function/class to the record's context, skipping frames that
//! belong to the logging machinery or to configured wrapper namespaces.

// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]

pub mod config;
pub mod domain;
pub mod processor;
pub mod stack;

// Re-export main types for easy access
pub use config::{ConfigError, ResolverConfig};
pub use domain::{LogRecord, Severity};
pub use processor::{keys, CallSiteResolver, Processor, ProcessorChain};
pub use stack::{BacktraceInspector, CaptureError, StackFrame, StackInspector};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
