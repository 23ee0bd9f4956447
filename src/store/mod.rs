//! Store Module
//!
//! Bounded in-memory record storage with TTL expiry and LRU eviction.

pub mod clock;
mod entry;
mod recency;
mod stats;
mod store;


// Re-export public types
pub use clock::{Clock, SystemClock};
pub use entry::StoreEntry;
pub use recency::RecencyTracker;
pub use stats::StoreStats;
pub use store::RecordStore;

// == Public Constants ==
/// Default maximum number of live records
pub const DEFAULT_CAPACITY: usize = 25;

/// Default record time-to-live in seconds
pub const DEFAULT_TTL_SECS: u64 = 300;
