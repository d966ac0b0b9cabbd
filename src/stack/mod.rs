//! Stack inspection seam.
//!
//! The resolver never talks to the platform's unwinding facility directly;
//! it goes through the `StackInspector` trait so tests can script frame
//! sequences deterministically. `BacktraceInspector` is the production
//! implementation.

mod capture;

pub use capture::BacktraceInspector;

use thiserror::Error;

/// The platform could not introspect the call stack. Recovered locally by
/// the resolver; never surfaced to the caller's logging path.
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Stack capture unavailable: {0}")]
    Unavailable(String),
}

/// Read-only snapshot of one call-stack entry.
///
/// `class` holds the owning module/type path of the function, when the
/// symbol carries one (e.g. `my_app::telemetry::Logger` for
/// `my_app::telemetry::Logger::emit`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackFrame {
    pub function: Option<String>,
    pub class: Option<String>,
    pub file: Option<String>,
    pub line: Option<u32>,
}

/// Capability seam over the runtime's stack inspection facility.
///
/// Implementations return frames ordered innermost (most recent call) first
/// and must not mutate the stack they observe.
pub trait StackInspector: Send + Sync {
    fn capture_frames(&self) -> Result<Vec<StackFrame>, CaptureError>;
}
