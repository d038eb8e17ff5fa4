//! Telemetry processor trait and chain.

use tf_telemetry::TelemetryItem;
use tracing::trace;

/// A post-collection transformation applied to telemetry items before
/// export.
///
/// Processors mutate items in place and must leave kinds they do not
/// handle untouched. Implementations hold no per-item state, so one
/// processor instance is safe to share across threads.
pub trait TelemetryProcessor: Send + Sync {
    /// Short processor name for diagnostics.
    fn name(&self) -> &'static str;

    /// Apply this processor to one item.
    fn process(&self, item: &mut TelemetryItem);
}

/// Applies a fixed sequence of processors in registration order.
#[derive(Default)]
pub struct ProcessorChain {
    processors: Vec<Box<dyn TelemetryProcessor>>,
}

impl ProcessorChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a processor to the end of the chain.
    pub fn push(&mut self, processor: Box<dyn TelemetryProcessor>) {
        self.processors.push(processor);
    }

    /// Builder-style variant of [`push`](Self::push).
    pub fn with(mut self, processor: Box<dyn TelemetryProcessor>) -> Self {
        self.push(processor);
        self
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    /// Run every processor over `item`, in order.
    pub fn process(&self, item: &mut TelemetryItem) {
        for processor in &self.processors {
            trace!(
                processor = processor.name(),
                kind = %item.kind(),
                "applying telemetry processor"
            );
            processor.process(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tf_telemetry::{EventTelemetry, RequestTelemetry};

    struct TagProcessor {
        tag: &'static str,
    }

    impl TelemetryProcessor for TagProcessor {
        fn name(&self) -> &'static str {
            "tag"
        }

        fn process(&self, item: &mut TelemetryItem) {
            if let TelemetryItem::Request(request) = item {
                let order = request.properties.entry("order".to_string()).or_default();
                order.push_str(self.tag);
            }
        }
    }

    #[test]
    fn test_chain_applies_in_registration_order() {
        let chain = ProcessorChain::new()
            .with(Box::new(TagProcessor { tag: "a" }))
            .with(Box::new(TagProcessor { tag: "b" }));
        assert_eq!(chain.len(), 2);

        let mut item = TelemetryItem::Request(RequestTelemetry::new("GET /"));
        chain.process(&mut item);

        if let TelemetryItem::Request(request) = &item {
            assert_eq!(request.properties.get("order").map(String::as_str), Some("ab"));
        } else {
            panic!("kind changed");
        }
    }

    #[test]
    fn test_empty_chain_is_noop() {
        let chain = ProcessorChain::new();
        assert!(chain.is_empty());

        let mut item = TelemetryItem::Event(EventTelemetry::new("signup"));
        let before = item.clone();
        chain.process(&mut item);
        assert_eq!(item, before);
    }
}
