//! Property-based tests for the query redactor.
//!
//! Uses proptest to verify the redaction contract holds across many
//! random inputs: the no-op paths are byte-identical, relative URLs are
//! never touched, redaction is idempotent, and matched values never
//! survive.

use proptest::prelude::*;
use tf_redact::{redact_url, RedactOptions};

fn param_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9]{0,7}"
}

fn param_value() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{0,12}"
}

fn query_suffix(params: &[(String, String)]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let mut query = String::from("?");
    for (i, (name, value)) in params.iter().enumerate() {
        if i > 0 {
            query.push('&');
        }
        query.push_str(name);
        query.push('=');
        query.push_str(value);
    }
    query
}

fn absolute_url(params: &[(String, String)]) -> String {
    format!("https://example.com/path{}", query_suffix(params))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// With no configured keys, the input comes back byte-identical.
    #[test]
    fn no_keys_is_identity(
        params in prop::collection::vec((param_name(), param_value()), 0..6),
    ) {
        let input = absolute_url(&params);
        prop_assert_eq!(redact_url(&input, &RedactOptions::default()), input);
    }

    /// Relative inputs come back byte-identical for any configuration.
    #[test]
    fn relative_is_identity(
        path in "[a-z]{1,8}",
        params in prop::collection::vec((param_name(), param_value()), 0..4),
        keys in prop::collection::vec(param_name(), 0..4),
    ) {
        let input = format!("/{}{}", path, query_suffix(&params));
        let options = RedactOptions::with_keys(keys);
        prop_assert_eq!(redact_url(&input, &options), input);
    }

    /// The configured key's casing does not change the output.
    #[test]
    fn key_casing_is_irrelevant(
        params in prop::collection::vec((param_name(), param_value()), 0..6),
        key in param_name(),
    ) {
        let input = absolute_url(&params);
        let lower = redact_url(&input, &RedactOptions::with_keys([key.to_lowercase()]));
        let upper = redact_url(&input, &RedactOptions::with_keys([key.to_uppercase()]));
        prop_assert_eq!(lower, upper);
    }

    /// Applying the same options twice equals applying them once.
    #[test]
    fn redaction_is_idempotent(
        params in prop::collection::vec((param_name(), param_value()), 0..6),
        keys in prop::collection::vec(param_name(), 0..3),
    ) {
        let input = absolute_url(&params);
        let options = RedactOptions::with_keys(keys);
        let once = redact_url(&input, &options);
        let twice = redact_url(&once, &options);
        prop_assert_eq!(twice, once);
    }

    /// A matched parameter's original value never survives redaction.
    #[test]
    fn matched_values_never_survive(
        key in param_name(),
        suffix in "[A-Za-z0-9]{8,16}",
        extra in prop::collection::vec((param_name(), param_value()), 0..3),
    ) {
        // Long enough that no short unmatched value can contain it.
        let canary = format!("canary{}", suffix);
        let mut params = vec![(key.clone(), canary.clone())];
        params.extend(extra);

        let input = absolute_url(&params);
        let out = redact_url(&input, &RedactOptions::with_keys([key]));
        prop_assert!(!out.contains(&canary), "canary survived: {}", out);
        prop_assert!(out.contains("REDACTED"));
    }

    /// The redactor is total: arbitrary strings never panic.
    #[test]
    fn total_over_arbitrary_strings(
        raw in ".*",
        keys in prop::collection::vec(param_name(), 0..3),
    ) {
        let _ = redact_url(&raw, &RedactOptions::with_keys(keys));
    }
}
