use super::Processor;
use crate::config::{ConfigError, ResolverConfig};
use crate::domain::{LogRecord, Severity};
use crate::stack::{BacktraceInspector, StackFrame, StackInspector};
use serde_json::Value;
use std::sync::Arc;

/// Context keys attached by the resolver. Handlers read these for
/// display/storage; an absent frame field is stored as an explicit
/// `Value::Null`, never omitted.
pub mod keys {
    pub const FILE: &str = "file";
    pub const LINE: &str = "line";
    pub const FUNCTION: &str = "function";
    pub const CLASS: &str = "class";
}

/// Namespaces always skipped when scanning outward for the call site: the
/// resolver's own modules and the capture machinery underneath them.
const BUILTIN_SKIP_PREFIXES: &[&str] = &["callsite::", "backtrace::"];

/// Processor that resolves the true call site of a log emission.
///
/// For each record at or above the configured severity threshold, captures
/// the active call stack, walks it innermost-to-outermost past the logging
/// machinery and any configured wrapper namespaces, and attaches the first
/// qualifying frame's file/line/function/class to the record's context.
///
/// Stateless per invocation and safe for concurrent use; the configuration
/// is fixed at construction.
pub struct CallSiteResolver {
    threshold: Severity,
    skip_prefixes: Vec<String>,
    skip_functions: Vec<String>,
    frames_to_skip: usize,
    inspector: Arc<dyn StackInspector>,
}

impl CallSiteResolver {
    /// Build a resolver using the platform backtrace facility.
    pub fn new(config: ResolverConfig) -> Result<Self, ConfigError> {
        Self::with_inspector(config, Arc::new(BacktraceInspector::new()))
    }

    /// Build a resolver around a specific stack inspection facility.
    pub fn with_inspector(
        config: ResolverConfig,
        inspector: Arc<dyn StackInspector>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut skip_prefixes: Vec<String> = BUILTIN_SKIP_PREFIXES
            .iter()
            .map(|prefix| (*prefix).to_string())
            .collect();
        skip_prefixes.extend(config.skip_prefixes);

        Ok(Self {
            threshold: config.threshold,
            skip_prefixes,
            skip_functions: config.skip_functions,
            frames_to_skip: config.frames_to_skip,
            inspector,
        })
    }

    fn locate_call_site<'a>(&self, frames: &'a [StackFrame]) -> Option<&'a StackFrame> {
        frames
            .iter()
            .skip(self.frames_to_skip)
            .find(|frame| !self.should_skip(frame))
    }

    fn should_skip(&self, frame: &StackFrame) -> bool {
        // A frame with no symbol information cannot name a call site
        let Some(owner) = frame.class.as_deref().or(frame.function.as_deref()) else {
            return true;
        };

        // Trait impl symbols demangle as `<Type as Trait>::method`
        let owner = owner.strip_prefix('<').unwrap_or(owner);
        if self
            .skip_prefixes
            .iter()
            .any(|prefix| owner.starts_with(prefix.as_str()))
        {
            return true;
        }

        if let Some(function) = frame.function.as_deref()
            && self.skip_functions.iter().any(|skip| skip == function)
        {
            return true;
        }

        false
    }

    fn enrich(record: &mut LogRecord, frame: &StackFrame) {
        record.context.insert(
            keys::FILE.to_string(),
            frame.file.as_deref().map_or(Value::Null, Value::from),
        );
        record.context.insert(
            keys::LINE.to_string(),
            frame.line.map_or(Value::Null, Value::from),
        );
        record.context.insert(
            keys::FUNCTION.to_string(),
            frame.function.as_deref().map_or(Value::Null, Value::from),
        );
        record.context.insert(
            keys::CLASS.to_string(),
            frame.class.as_deref().map_or(Value::Null, Value::from),
        );
    }
}

impl Processor for CallSiteResolver {
    fn name(&self) -> &str {
        "introspection"
    }

    fn process(&self, mut record: LogRecord) -> LogRecord {
        // Gate before capture: stack inspection is only paid for records
        // that meet the threshold
        if record.severity < self.threshold {
            return record;
        }

        let frames = match self.inspector.capture_frames() {
            Ok(frames) => frames,
            Err(error) => {
                // Fail open: the caller's logging path must never break
                tracing::trace!(error = %error, "Stack capture failed, record passed through");
                return record;
            }
        };

        if let Some(call_site) = self.locate_call_site(&frames) {
            Self::enrich(&mut record, call_site);
        }

        record
    }
}
