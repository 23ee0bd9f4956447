//! Response DTOs for the record service API
//!
//! Defines the structure of outgoing HTTP response bodies. Record
//! payloads serialize the `Record` model directly; the types here cover
//! list envelopes and the operational endpoints.

use serde::Serialize;

use crate::models::Record;

/// Response body for list operations (GET /records, GET /records/type/:kind)
#[derive(Debug, Clone, Serialize)]
pub struct RecordListResponse {
    /// The matching live records, in no guaranteed order
    pub records: Vec<Record>,
    /// Number of records returned
    pub count: usize,
}

impl RecordListResponse {
    /// Creates a new RecordListResponse
    pub fn new(records: Vec<Record>) -> Self {
        let count = records.len();
        Self { records, count }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of lookups that returned a live record
    pub hits: u64,
    /// Number of lookups that found nothing
    pub misses: u64,
    /// Number of entries removed by LRU eviction
    pub evictions: u64,
    /// Number of entries removed by TTL expiry
    pub expirations: u64,
    /// Current number of entries in the store
    pub live_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from store statistics
    pub fn new(stats: crate::store::StoreStats) -> Self {
        let hit_rate = stats.hit_rate();
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            expirations: stats.expirations,
            live_entries: stats.live_entries,
            hit_rate,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
