//! Query-string value redaction for collected request URLs.
//!
//! Request URLs routinely carry session tokens, API keys, and other
//! secrets in their query strings. This crate rewrites a URL so that the
//! values of configured parameter names are replaced with a placeholder
//! before the URL leaves the process.
//!
//! # Key guarantees
//!
//! - **Untouched unless redacted**: with no configured keys, no matching
//!   parameter, or a relative URL, the input comes back byte-identical;
//!   the query string is never reparsed and re-encoded as a side effect.
//! - **Deterministic output**: matched parameters come first, grouped in
//!   configuration-key order with one canonical spelling per key;
//!   unmatched parameters follow in their original order.
//! - **Total**: every input string has defined behavior. There is no
//!   failure mode and no panic path.
//!
//! # Example
//!
//! ```
//! use tf_redact::{redact_url, RedactOptions};
//!
//! let options = RedactOptions::with_keys(["token"]);
//! let out = redact_url("https://example.com/?id=7&token=abc123", &options);
//! assert_eq!(out, "https://example.com/?token=REDACTED&id=7");
//! ```

pub mod error;
pub mod options;
pub mod query;

pub use error::{RedactError, Result};
pub use options::{resolve_options, OptionsSource, RedactOptions, DEFAULT_REDACTED_VALUE};
pub use query::{redact, redact_url};
