use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Request options shared by every resource: a location plus an optional
/// time window.
///
/// Coordinates are not range-checked locally; out-of-range values are
/// rejected by the server. Absent window bounds are omitted from the query
/// string entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CommonOptions {
    pub lat: f64,
    pub lng: f64,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

/// Request metadata echoed back by the API, including billing counters.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Meta {
    pub cost: Option<u32>,
    pub daily_quota: Option<u32>,
    pub request_count: Option<u32>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub params: Vec<String>,
}
