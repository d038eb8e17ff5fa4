//! Fuzz target for options JSON parsing.
//!
//! Tests that options parsing handles arbitrary input without
//! panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tf_redact::RedactOptions;

fuzz_target!(|data: &[u8]| {
    // Parsing may only ever return an error, never panic
    let _ = serde_json::from_slice::<RedactOptions>(data);
});
