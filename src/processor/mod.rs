//! Log record processors.
//!
//! A processor is one stage in the record-enrichment pipeline that sits
//! between the logging front-end and the handler layer. `CallSiteResolver`
//! is the introspection stage; `ProcessorChain` runs an ordered set of
//! stages over each record.

mod chain;
mod introspection;

pub use chain::ProcessorChain;
pub use introspection::{keys, CallSiteResolver};

use crate::domain::LogRecord;

/// Trait for record-enrichment stages.
///
/// Implementations take ownership of the record and return it, possibly with
/// additional context keys. They must never remove existing keys or alter
/// the record's severity or message.
pub trait Processor: Send + Sync {
    /// Short identifier used in diagnostics (e.g. "introspection").
    fn name(&self) -> &str;

    /// Transform one record.
    fn process(&self, record: LogRecord) -> LogRecord;
}
