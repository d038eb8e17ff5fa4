//! The query-string redactor.
//!
//! A single left-to-right pass over the URL's query pairs partitions them
//! into matched and unmatched groups. The query is then rebuilt with the
//! matched pairs first, grouped by key in configuration order with their
//! values replaced, followed by the unmatched pairs in their original
//! relative order. A URL that would come back unchanged is never
//! reconstructed, so every no-op path is byte-identical.

use crate::options::RedactOptions;
use std::collections::HashMap;
use url::Url;

/// Case-insensitive set of configured redaction keys.
///
/// Lookup folds to lowercase; the first occurrence of each distinct key
/// in the configuration fixes the output slot of its matched group.
struct KeySet {
    slots: HashMap<String, usize>,
}

impl KeySet {
    fn new(keys: &[String]) -> Self {
        let mut slots = HashMap::with_capacity(keys.len());
        for key in keys {
            let folded = key.to_lowercase();
            if !slots.contains_key(&folded) {
                let slot = slots.len();
                slots.insert(folded, slot);
            }
        }
        Self { slots }
    }

    fn len(&self) -> usize {
        self.slots.len()
    }

    /// Output slot for a parameter name, if it is a configured key.
    fn slot(&self, name: &str) -> Option<usize> {
        self.slots.get(&name.to_lowercase()).copied()
    }
}

/// Accumulated state for one configured key: the spelling taken from the
/// first matching parameter in the URL, and how many parameters matched.
#[derive(Default)]
struct MatchedKey {
    spelling: Option<String>,
    count: usize,
}

/// Redact configured query parameter values in a raw URL string.
///
/// Relative and otherwise unparseable inputs pass through byte-identical,
/// as does any input in which no configured key matches a parameter.
pub fn redact_url(raw: &str, options: &RedactOptions) -> String {
    if options.keys.is_empty() {
        return raw.to_string();
    }
    let Ok(url) = Url::parse(raw) else {
        // Relative URLs (no scheme) land here. They are passed through
        // verbatim rather than resolved against a base.
        return raw.to_string();
    };
    match redact_query(&url, options) {
        Some(redacted) => redacted.into(),
        None => raw.to_string(),
    }
}

/// Redact configured query parameter values in a parsed URL.
///
/// Returns a value equal to the input when nothing matches.
pub fn redact(url: &Url, options: &RedactOptions) -> Url {
    if options.keys.is_empty() {
        return url.clone();
    }
    redact_query(url, options).unwrap_or_else(|| url.clone())
}

/// Rebuild `url` with matched query values replaced, or `None` when no
/// parameter matched a configured key.
fn redact_query(url: &Url, options: &RedactOptions) -> Option<Url> {
    let query = url.query()?;
    if query.is_empty() {
        return None;
    }

    let keys = KeySet::new(&options.keys);
    let mut matched: Vec<MatchedKey> = Vec::new();
    matched.resize_with(keys.len(), MatchedKey::default);
    let mut unmatched: Vec<(String, String)> = Vec::new();
    let mut any_matched = false;

    for (name, value) in url.query_pairs() {
        match keys.slot(&name) {
            Some(slot) => {
                let entry = &mut matched[slot];
                if entry.spelling.is_none() {
                    entry.spelling = Some(name.into_owned());
                }
                entry.count += 1;
                any_matched = true;
            }
            None => unmatched.push((name.into_owned(), value.into_owned())),
        }
    }

    if !any_matched {
        return None;
    }

    let replacement = options.replacement();
    let mut redacted = url.clone();
    {
        let mut pairs = redacted.query_pairs_mut();
        pairs.clear();
        for entry in &matched {
            if let Some(spelling) = &entry.spelling {
                for _ in 0..entry.count {
                    pairs.append_pair(spelling, replacement);
                }
            }
        }
        for (name, value) in &unmatched {
            pairs.append_pair(name, value);
        }
    }
    Some(redacted)
}
