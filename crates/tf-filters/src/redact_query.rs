//! Query-string redaction over request telemetry.

use crate::processor::TelemetryProcessor;
use tf_redact::{redact_url, RedactOptions};
use tf_telemetry::TelemetryItem;
use tracing::debug;

/// Replaces configured query parameter values in request URLs.
///
/// Only [`TelemetryItem::Request`] carries a URL; every other kind
/// passes through untouched, and a request without a URL is skipped.
pub struct RedactQueryStringProcessor {
    options: RedactOptions,
}

impl RedactQueryStringProcessor {
    /// Absent options are treated as the empty configuration, which
    /// redacts nothing.
    pub fn new(options: Option<RedactOptions>) -> Self {
        Self {
            options: options.unwrap_or_default(),
        }
    }

    pub fn options(&self) -> &RedactOptions {
        &self.options
    }
}

impl TelemetryProcessor for RedactQueryStringProcessor {
    fn name(&self) -> &'static str {
        "redact_query_string"
    }

    fn process(&self, item: &mut TelemetryItem) {
        if let TelemetryItem::Request(request) = item {
            if let Some(raw) = request.url.as_deref() {
                let redacted = redact_url(raw, &self.options);
                if redacted != raw {
                    debug!(name = %request.name, "redacted query string values in request url");
                    request.url = Some(redacted);
                }
            }
        }
    }
}
