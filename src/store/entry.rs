//! Store Entry Module
//!
//! Wraps a record with its expiry deadline.

use crate::models::Record;

// == Store Entry ==
/// A single live entry: the record plus its absolute expiry deadline.
///
/// The deadline is set at write time (`now + ttl`) and compared against
/// the store's clock at read time. Entries are purged lazily.
#[derive(Debug, Clone)]
pub struct StoreEntry {
    /// The stored record
    pub record: Record,
    /// Creation timestamp (Unix milliseconds)
    pub written_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl StoreEntry {
    // == Constructor ==
    /// Creates an entry written at `now_ms`, expiring `ttl_ms` later.
    pub fn new(record: Record, now_ms: u64, ttl_ms: u64) -> Self {
        Self {
            record,
            written_at: now_ms,
            expires_at: now_ms.saturating_add(ttl_ms),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired as of `now_ms`.
    ///
    /// Boundary condition: an entry is expired once the current time is
    /// greater than or equal to the deadline, so a TTL that has fully
    /// elapsed makes the entry absent immediately.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms >= self.expires_at
    }

    // == Time To Live ==
    /// Returns remaining lifetime in milliseconds as of `now_ms`.
    ///
    /// Returns 0 once the entry has expired.
    pub fn ttl_remaining_ms(&self, now_ms: u64) -> u64 {
        self.expires_at.saturating_sub(now_ms)
    }
}
