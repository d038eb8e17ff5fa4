//! Fuzz target for the query redactor.
//!
//! The redactor is total: arbitrary raw input plus arbitrary options
//! must never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tf_redact::{redact_url, RedactOptions};

fuzz_target!(|input: (String, Vec<String>, Option<String>)| {
    let (raw, keys, redacted_value) = input;
    let mut options = RedactOptions::with_keys(keys);
    options.redacted_value = redacted_value;
    let _ = redact_url(&raw, &options);
});
