use super::{CaptureError, StackFrame, StackInspector};
use backtrace::Backtrace;

/// `StackInspector` backed by the `backtrace` crate.
///
/// Symbols are resolved eagerly and demangled, so frames come out with full
/// Rust paths: the owning path lands in `class` and the final segment in
/// `function`. File and line are populated when debug info is present.
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktraceInspector;

impl BacktraceInspector {
    pub fn new() -> Self {
        Self
    }
}

impl StackInspector for BacktraceInspector {
    fn capture_frames(&self) -> Result<Vec<StackFrame>, CaptureError> {
        let trace = Backtrace::new();

        let mut frames = Vec::new();
        for frame in trace.frames() {
            // Inlined functions yield multiple symbols per frame, innermost first
            for symbol in frame.symbols() {
                let (class, function) = match symbol.name() {
                    Some(name) => split_symbol(&name.to_string()),
                    None => (None, None),
                };

                frames.push(StackFrame {
                    function,
                    class,
                    file: symbol.filename().map(|path| path.display().to_string()),
                    line: symbol.lineno(),
                });
            }
        }

        if frames.is_empty() {
            return Err(CaptureError::Unavailable(
                "backtrace produced no frames".to_string(),
            ));
        }

        Ok(frames)
    }
}

/// Split a demangled symbol path into (owning path, function name).
///
/// `my_app::telemetry::Logger::emit::h1f0ca2b3d4e5f607` becomes
/// `(Some("my_app::telemetry::Logger"), Some("emit"))`; a bare top-level
/// symbol like `main` becomes `(None, Some("main"))`.
fn split_symbol(raw: &str) -> (Option<String>, Option<String>) {
    let trimmed = strip_hash_suffix(raw);
    if trimmed.is_empty() {
        return (None, None);
    }

    match trimmed.rsplit_once("::") {
        Some((path, name)) => (Some(path.to_string()), Some(name.to_string())),
        None => (None, Some(trimmed.to_string())),
    }
}

/// Drop the trailing `::h<16 hex digits>` monomorphization hash, if present.
fn strip_hash_suffix(raw: &str) -> &str {
    if let Some((head, tail)) = raw.rsplit_once("::")
        && tail.len() == 17
        && tail.starts_with('h')
        && tail[1..].chars().all(|c| c.is_ascii_hexdigit())
    {
        return head;
    }
    raw
}
