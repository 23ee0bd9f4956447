//! Record Store Module
//!
//! The bounded expiring store: HashMap storage combined with recency
//! tracking for LRU eviction and per-entry TTL deadlines.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::models::Record;
use crate::store::{Clock, RecencyTracker, StoreEntry, StoreStats, SystemClock};

// == Record Store ==
/// Bounded in-memory record storage with LRU eviction and TTL expiry.
///
/// Holds at most `capacity` records, each valid for at most `ttl` since
/// its last write. Absence is always a normal return value; the store
/// itself never fails.
#[derive(Debug)]
pub struct RecordStore {
    /// Id-to-entry storage
    entries: HashMap<String, StoreEntry>,
    /// Access-order tracker for eviction selection
    recency: RecencyTracker,
    /// Activity counters
    stats: StoreStats,
    /// Maximum number of entries allowed
    capacity: usize,
    /// Entry lifetime in milliseconds
    ttl_ms: u64,
    /// Time source for expiry deadlines
    clock: Arc<dyn Clock>,
}

impl RecordStore {
    // == Constructors ==
    /// Creates a store with the given capacity and TTL, using the system clock.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self::with_clock(capacity, ttl, Arc::new(SystemClock))
    }

    /// Creates a store driven by an explicit clock.
    ///
    /// Tests supply a manual clock here so expiry can be asserted
    /// without sleeping.
    pub fn with_clock(capacity: usize, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            recency: RecencyTracker::new(),
            stats: StoreStats::new(),
            capacity,
            ttl_ms: ttl.as_millis() as u64,
            clock,
        }
    }

    // == Put ==
    /// Inserts or replaces the record at `id`. Always succeeds.
    ///
    /// The entry's expiry deadline is reset to now + TTL and it becomes
    /// the most recently used. Inserting a *new* id while at capacity
    /// first evicts the least recently used entry; replacing an
    /// existing id never evicts.
    pub fn put(&mut self, id: String, record: Record) {
        let is_replacement = self.entries.contains_key(&id);

        if !is_replacement && self.entries.len() >= self.capacity {
            if let Some(evicted_id) = self.recency.evict_oldest() {
                self.entries.remove(&evicted_id);
                self.stats.record_eviction();
            }
        }

        let now = self.clock.now_ms();
        let entry = StoreEntry::new(record, now, self.ttl_ms);
        self.entries.insert(id.clone(), entry);

        self.recency.touch(&id);
        self.stats.set_live_entries(self.entries.len());
    }

    // == Get ==
    /// Returns the record at `id` if present and not expired.
    ///
    /// Expired entries are purged on access and reported as absent.
    /// A hit refreshes the entry's recency rank (reads count as use).
    pub fn get(&mut self, id: &str) -> Option<Record> {
        let now = self.clock.now_ms();

        match self.entries.get(id) {
            Some(entry) if entry.is_expired(now) => {
                self.entries.remove(id);
                self.recency.remove(id);
                self.stats.record_expirations(1);
                self.stats.record_miss();
                self.stats.set_live_entries(self.entries.len());
                None
            }
            Some(entry) => {
                let record = entry.record.clone();
                self.stats.record_hit();
                self.recency.touch(id);
                Some(record)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == List ==
    /// Iterates over all currently-live records.
    ///
    /// Liveness is re-evaluated on each call; expired entries are
    /// filtered out but not purged, and recency ranks are untouched.
    /// No ordering is guaranteed.
    pub fn list(&self) -> impl Iterator<Item = Record> + '_ {
        let now = self.clock.now_ms();
        self.entries
            .values()
            .filter(move |entry| !entry.is_expired(now))
            .map(|entry| entry.record.clone())
    }

    // == Sweep Expired ==
    /// Removes all expired entries from the store.
    ///
    /// Batched form of the lazy purge done by `get`; used by the
    /// background sweeper. Returns the number of entries removed.
    pub fn sweep_expired(&mut self) -> usize {
        let now = self.clock.now_ms();
        let expired_ids: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(now))
            .map(|(id, _)| id.clone())
            .collect();

        let count = expired_ids.len();

        for id in expired_ids {
            self.entries.remove(&id);
            self.recency.remove(&id);
        }

        self.stats.record_expirations(count as u64);
        self.stats.set_live_entries(self.entries.len());
        count
    }

    // == Clear ==
    /// Drops all entries. Counters are preserved.
    pub fn clear(&mut self) {
        self.entries.clear();
        while self.recency.evict_oldest().is_some() {}
        self.stats.set_live_entries(0);
    }

    // == Stats ==
    /// Returns current store statistics.
    pub fn stats(&self) -> StoreStats {
        let mut stats = self.stats.clone();
        stats.set_live_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
