//! TTL Sweeper Task
//!
//! Background task that periodically removes expired records.
//!
//! Expiry is already enforced lazily on access; this sweep is an
//! optimization that reclaims memory for entries nobody reads again,
//! with no change to observable behavior.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::store::RecordStore;

/// Spawns a background task that periodically sweeps expired records.
///
/// The task runs in an infinite loop, sleeping for the specified
/// interval between sweeps. It acquires a write lock on the store for
/// exactly one sweep at a time.
///
/// # Arguments
/// * `store` - Shared reference to the record store
/// * `sweep_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the
/// task during graceful shutdown.
pub fn spawn_sweeper_task(
    store: Arc<RwLock<RecordStore>>,
    sweep_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(sweep_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting TTL sweeper task with interval of {} seconds",
            sweep_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut store_guard = store.write().await;
                store_guard.sweep_expired()
            };

            if removed > 0 {
                info!("TTL sweep: removed {} expired records", removed);
            } else {
                debug!("TTL sweep: no expired records found");
            }
        }
    })
}
