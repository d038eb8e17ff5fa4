//! Telemetry filter processors.
//!
//! Processors run between collection and export, rewriting items in
//! place. A [`ProcessorChain`] applies them in registration order; each
//! processor decides per item kind whether it applies and leaves every
//! other kind untouched.
//!
//! # Example
//!
//! ```
//! use tf_filters::{ProcessorChain, RedactQueryStringProcessor};
//! use tf_redact::RedactOptions;
//! use tf_telemetry::{RequestTelemetry, TelemetryItem};
//!
//! let chain = ProcessorChain::new().with(Box::new(RedactQueryStringProcessor::new(
//!     Some(RedactOptions::with_keys(["token"])),
//! )));
//!
//! let mut item = TelemetryItem::Request(
//!     RequestTelemetry::new("GET /search").with_url("https://example.com/?q=rust&token=abc"),
//! );
//! chain.process(&mut item);
//! assert_eq!(item.url(), Some("https://example.com/?token=REDACTED&q=rust"));
//! ```

pub mod processor;
pub mod redact_query;

pub use processor::{ProcessorChain, TelemetryProcessor};
pub use redact_query::RedactQueryStringProcessor;
