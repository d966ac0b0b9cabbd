use super::Processor;
use crate::domain::LogRecord;
use std::sync::Arc;

/// Ordered chain of processors applied to each record before it reaches
/// the handler layer.
#[derive(Default, Clone)]
pub struct ProcessorChain {
    processors: Vec<Arc<dyn Processor>>,
}

impl ProcessorChain {
    /// Create an empty chain. An empty chain passes records through as-is.
    pub fn new() -> Self {
        Self {
            processors: Vec::new(),
        }
    }

    /// Register a processor. Processors run in registration order.
    pub fn push<P: Processor + 'static>(&mut self, processor: P) {
        let processor: Arc<dyn Processor> = Arc::new(processor);
        tracing::debug!(processor = processor.name(), "Registered processor");
        self.processors.push(processor);
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    /// Fold the record through every registered processor in order.
    pub fn process(&self, record: LogRecord) -> LogRecord {
        self.processors
            .iter()
            .fold(record, |record, processor| processor.process(record))
    }
}
