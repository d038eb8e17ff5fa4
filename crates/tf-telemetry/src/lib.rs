//! Telemetry item model shared by filter processors.
//!
//! This crate defines the items a host application's collector hands to the
//! filter pipeline before export:
//! - A `kind` discriminator covering requests, dependencies, events,
//!   exceptions, and traces
//! - Per-kind payload structs; only requests carry a URL
//! - serde envelopes tagged with the item kind

pub mod item;

pub use item::{
    DependencyTelemetry, EventTelemetry, ExceptionTelemetry, ItemKind, RequestTelemetry,
    SeverityLevel, TelemetryItem, TraceTelemetry,
};

/// Schema version for serialized telemetry items.
pub const SCHEMA_VERSION: &str = "1.0.0";
