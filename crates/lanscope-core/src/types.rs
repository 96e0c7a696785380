//! Scan data model
//!
//! These types mirror the JSON the scan service returns from `GET /scan`.
//! A [`ScanResult`] is an immutable snapshot: each successful scan replaces
//! the previous one in full, nothing is merged or persisted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse device classification used for filtering and iconography.
///
/// The scan service is free to invent new categories; anything we don't
/// recognize is carried verbatim in [`Category::Unknown`] so the raw label
/// survives display and re-serialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Device,
    Router,
    Other,
    Unknown(String),
}

impl Category {
    /// The three categories the service is known to emit today.
    pub fn known() -> [Category; 3] {
        [Category::Device, Category::Router, Category::Other]
    }

    /// Display label (the wire string for known categories).
    pub fn label(&self) -> &str {
        match self {
            Category::Device => "Device",
            Category::Router => "Router",
            Category::Other => "Other",
            Category::Unknown(label) => label,
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Device" => Category::Device,
            "Router" => Category::Router,
            "Other" => Category::Other,
            _ => Category::Unknown(value),
        }
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        match value {
            Category::Unknown(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One discovered network endpoint with identity and classification fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub ip: String,
    pub mac: String,
    pub hostname: String,
    pub category: Category,
}

/// Interface byte counters reported alongside a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UsageStats {
    pub bytes_sent: u64,
    pub bytes_recv: u64,
}

/// The full output of one scan invocation.
///
/// `devices` keeps the service's order; the UI renders cards in exactly
/// this order (stable, insertion order).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    pub devices: Vec<Device>,
    pub usage: UsageStats,
    /// Scan duration in seconds, as measured by the service.
    pub scan_time: f64,
}
