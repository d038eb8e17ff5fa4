//! Redaction options: which query parameters to redact and what to put
//! in their place.
//!
//! Options come from the host application, a JSON file, or the
//! environment. Resolution order: explicit path → options file named by
//! the environment → inline environment variables → user config
//! directory → built-in defaults (nothing redacted).

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Replacement used when no explicit value is configured.
pub const DEFAULT_REDACTED_VALUE: &str = "REDACTED";

/// Environment variable naming an options JSON file.
pub const ENV_OPTIONS_PATH: &str = "TELEMETRY_FILTERS_OPTIONS";

/// Environment variable carrying a comma-separated key list.
pub const ENV_REDACT_KEYS: &str = "TELEMETRY_FILTERS_REDACT_KEYS";

/// Environment variable overriding the replacement value.
pub const ENV_REDACTED_VALUE: &str = "TELEMETRY_FILTERS_REDACTED_VALUE";

/// Options file name looked up in the config directory.
const OPTIONS_FILENAME: &str = "redact.json";

/// Application name for the user config directory.
const APP_NAME: &str = "telemetry-filters";

/// Configuration for query-string value redaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedactOptions {
    /// Query parameter names to redact. Matching is case-insensitive;
    /// duplicate entries collapse to the first occurrence.
    pub keys: Vec<String>,

    /// Replacement for matched parameter values. Unset or empty falls
    /// back to [`DEFAULT_REDACTED_VALUE`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redacted_value: Option<String>,
}

impl RedactOptions {
    /// Empty options: no keys, nothing redacted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options redacting the given keys with the default replacement.
    pub fn with_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            redacted_value: None,
        }
    }

    /// Set the replacement value.
    pub fn with_redacted_value(mut self, value: impl Into<String>) -> Self {
        self.redacted_value = Some(value.into());
        self
    }

    /// Replacement string to emit for matched parameter values.
    pub fn replacement(&self) -> &str {
        match self.redacted_value.as_deref() {
            Some(value) if !value.is_empty() => value,
            _ => DEFAULT_REDACTED_VALUE,
        }
    }

    /// Whether no key is configured.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Load options from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let options: RedactOptions = serde_json::from_str(&content)?;
        Ok(options)
    }

    /// Save options to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Build options from the inline environment variables, if present.
    ///
    /// `TELEMETRY_FILTERS_REDACT_KEYS` holds a comma-separated key list;
    /// blank entries are dropped. Returns `None` when the variable is
    /// unset, so callers can continue down the resolution order.
    pub fn from_env() -> Option<Self> {
        let raw = env::var(ENV_REDACT_KEYS).ok()?;
        let keys = raw
            .split(',')
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(String::from)
            .collect();
        let redacted_value = env::var(ENV_REDACTED_VALUE)
            .ok()
            .filter(|value| !value.is_empty());
        Some(Self {
            keys,
            redacted_value,
        })
    }
}

/// Where resolved options came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OptionsSource {
    /// Explicitly provided path.
    ExplicitPath,

    /// File named by `TELEMETRY_FILTERS_OPTIONS`.
    EnvironmentPath,

    /// Inline `TELEMETRY_FILTERS_REDACT_KEYS` / `..._REDACTED_VALUE`.
    EnvironmentInline,

    /// `redact.json` in the user config directory.
    UserConfig,

    /// Built-in defaults: no keys, nothing redacted.
    #[default]
    BuiltinDefault,
}

impl std::fmt::Display for OptionsSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionsSource::ExplicitPath => write!(f, "explicit path"),
            OptionsSource::EnvironmentPath => write!(f, "environment path"),
            OptionsSource::EnvironmentInline => write!(f, "environment variables"),
            OptionsSource::UserConfig => write!(f, "user config"),
            OptionsSource::BuiltinDefault => write!(f, "builtin default"),
        }
    }
}

/// Resolve options using the standard resolution order.
///
/// 1. Explicit path (if provided)
/// 2. `TELEMETRY_FILTERS_OPTIONS` file path
/// 3. Inline environment variables
/// 4. `redact.json` in the user config directory
/// 5. Built-in defaults (no keys)
pub fn resolve_options(explicit: Option<&Path>) -> Result<(RedactOptions, OptionsSource)> {
    if let Some(path) = explicit {
        return Ok((RedactOptions::load(path)?, OptionsSource::ExplicitPath));
    }

    if let Ok(path) = env::var(ENV_OPTIONS_PATH) {
        if !path.is_empty() {
            return Ok((RedactOptions::load(&path)?, OptionsSource::EnvironmentPath));
        }
    }

    if let Some(options) = RedactOptions::from_env() {
        return Ok((options, OptionsSource::EnvironmentInline));
    }

    if let Some(path) = user_options_path() {
        if path.exists() {
            return Ok((RedactOptions::load(&path)?, OptionsSource::UserConfig));
        }
    }

    Ok((RedactOptions::default(), OptionsSource::BuiltinDefault))
}

fn user_options_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(OPTIONS_FILENAME))
}
