//! Telemetry items and their kind discriminator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Kind discriminator for telemetry items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Inbound request handled by the host application.
    Request,
    /// Outbound call to a dependency (database, HTTP service, queue).
    Dependency,
    /// Custom application event.
    Event,
    /// Captured exception.
    Exception,
    /// Diagnostic trace message.
    Trace,
}

impl ItemKind {
    /// Parse a kind from a string.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "request" => Some(ItemKind::Request),
            "dependency" => Some(ItemKind::Dependency),
            "event" => Some(ItemKind::Event),
            "exception" => Some(ItemKind::Exception),
            "trace" => Some(ItemKind::Trace),
            _ => None,
        }
    }

    /// Whether items of this kind carry a request URL.
    pub fn has_url(&self) -> bool {
        matches!(self, ItemKind::Request)
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ItemKind::Request => "request",
            ItemKind::Dependency => "dependency",
            ItemKind::Event => "event",
            ItemKind::Exception => "exception",
            ItemKind::Trace => "trace",
        };
        write!(f, "{}", s)
    }
}

/// Severity of a trace or exception.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SeverityLevel {
    Verbose,
    #[default]
    Information,
    Warning,
    Error,
    Critical,
}

/// An inbound request observed by the host application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestTelemetry {
    /// Unique item id.
    pub id: String,

    /// When the request started.
    pub timestamp: DateTime<Utc>,

    /// Request name, e.g. `GET /search`.
    pub name: String,

    /// Request URL as collected. Absent when the collector could not
    /// determine one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Response status code, as a string to accommodate non-HTTP hosts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_code: Option<String>,

    /// Wall-clock duration in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,

    /// Whether the request succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,

    /// Free-form string properties attached by the collector.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub properties: HashMap<String, String>,
}

impl RequestTelemetry {
    /// Create a request item with a fresh id and the current time.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            name: name.into(),
            url: None,
            response_code: None,
            duration_ms: None,
            success: None,
            properties: HashMap::new(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_response_code(mut self, code: impl Into<String>) -> Self {
        self.response_code = Some(code.into());
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

/// An outbound dependency call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyTelemetry {
    /// Unique item id.
    pub id: String,

    /// When the call started.
    pub timestamp: DateTime<Utc>,

    /// Dependency name, e.g. `orders-db`.
    pub name: String,

    /// Target host or resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Dependency type, e.g. `sql`, `http`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependency_type: Option<String>,

    /// Command or query text, as collected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    /// Wall-clock duration in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,

    /// Whether the call succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,

    /// Free-form string properties.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub properties: HashMap<String, String>,
}

impl DependencyTelemetry {
    /// Create a dependency item with a fresh id and the current time.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            name: name.into(),
            target: None,
            dependency_type: None,
            data: None,
            duration_ms: None,
            success: None,
            properties: HashMap::new(),
        }
    }
}

/// A custom application event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventTelemetry {
    pub timestamp: DateTime<Utc>,

    /// Event name.
    pub name: String,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub properties: HashMap<String, String>,
}

impl EventTelemetry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            name: name.into(),
            properties: HashMap::new(),
        }
    }
}

/// A captured exception.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExceptionTelemetry {
    pub timestamp: DateTime<Utc>,

    /// Exception message.
    pub message: String,

    /// Exception type name, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exception_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<SeverityLevel>,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub properties: HashMap<String, String>,
}

impl ExceptionTelemetry {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            message: message.into(),
            exception_type: None,
            severity: None,
            properties: HashMap::new(),
        }
    }
}

/// A diagnostic trace message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceTelemetry {
    pub timestamp: DateTime<Utc>,

    /// Trace message.
    pub message: String,

    #[serde(default)]
    pub severity: SeverityLevel,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub properties: HashMap<String, String>,
}

impl TraceTelemetry {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            message: message.into(),
            severity: SeverityLevel::default(),
            properties: HashMap::new(),
        }
    }
}

/// One telemetry item, tagged with its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TelemetryItem {
    Request(RequestTelemetry),
    Dependency(DependencyTelemetry),
    Event(EventTelemetry),
    Exception(ExceptionTelemetry),
    Trace(TraceTelemetry),
}

impl TelemetryItem {
    /// Kind discriminator for this item.
    pub fn kind(&self) -> ItemKind {
        match self {
            TelemetryItem::Request(_) => ItemKind::Request,
            TelemetryItem::Dependency(_) => ItemKind::Dependency,
            TelemetryItem::Event(_) => ItemKind::Event,
            TelemetryItem::Exception(_) => ItemKind::Exception,
            TelemetryItem::Trace(_) => ItemKind::Trace,
        }
    }

    /// Request URL, for the one kind that carries one.
    pub fn url(&self) -> Option<&str> {
        match self {
            TelemetryItem::Request(request) => request.url.as_deref(),
            _ => None,
        }
    }
}
