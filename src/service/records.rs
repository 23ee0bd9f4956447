//! Record Service
//!
//! Domain operations layered on the record store: listing, lookup,
//! creation, and update, plus id assignment and the deliberate
//! simulated-failure path used to demonstrate client-side rollback.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{Result, ServiceError};
use crate::models::Record;
use crate::store::RecordStore;

/// Sentinel `type` value that makes create/update fail deterministically.
pub const FAIL_SENTINEL: &str = "fail";

// == Record Service ==
/// Read/write operations over an explicitly injected store instance.
///
/// Mutations first await the configured artificial delay, then check
/// the failure sentinel, then write. Concurrent mutations in flight
/// during the delay window are independent; whichever finishes its
/// delay first writes first (last write wins on the store).
#[derive(Clone)]
pub struct RecordService {
    /// Shared store; lock scope is exactly one store operation
    store: Arc<RwLock<RecordStore>>,
    /// Artificial latency applied to create/update
    mutation_delay: Duration,
}

impl RecordService {
    // == Constructor ==
    /// Creates a service over the given store.
    pub fn new(store: Arc<RwLock<RecordStore>>, mutation_delay: Duration) -> Self {
        Self {
            store,
            mutation_delay,
        }
    }

    /// Returns the shared store handle (used by the background sweeper).
    pub fn store(&self) -> Arc<RwLock<RecordStore>> {
        Arc::clone(&self.store)
    }

    // == List All ==
    /// Returns all live records. No error conditions.
    pub async fn list_all(&self) -> Vec<Record> {
        let store = self.store.read().await;
        store.list().collect()
    }

    // == List By Type ==
    /// Returns the live records whose `type` equals `kind` exactly
    /// (case-sensitive). Empty if no matches.
    pub async fn list_by_type(&self, kind: &str) -> Vec<Record> {
        let store = self.store.read().await;
        store.list().filter(|r| r.kind == kind).collect()
    }

    // == Get By Id ==
    /// Returns the record at `id`, or None if it never existed, was
    /// evicted, or expired. Absence is a normal outcome.
    pub async fn get_by_id(&self, id: &str) -> Option<Record> {
        let mut store = self.store.write().await;
        store.get(id)
    }

    // == Create ==
    /// Creates a record with a freshly generated id.
    ///
    /// Awaits the artificial delay, then fails with `SimulatedFailure`
    /// if `kind` is the sentinel, leaving the store untouched.
    pub async fn create(&self, kind: String, description: String) -> Result<Record> {
        let id = Uuid::new_v4().to_string();
        debug!(%id, %kind, "creating record");

        self.simulate_latency().await;
        self.check_fail_sentinel(&kind)?;

        let record = Record {
            id: id.clone(),
            kind,
            description,
        };
        let mut store = self.store.write().await;
        store.put(id, record.clone());
        Ok(record)
    }

    // == Update ==
    /// Writes a record under the caller-supplied id.
    ///
    /// Updating an id with no live entry creates one at that id; this
    /// is a documented contract, not an accident. Same delay and
    /// sentinel semantics as `create`.
    pub async fn update(&self, id: String, kind: String, description: String) -> Result<Record> {
        debug!(%id, %kind, "updating record");

        self.simulate_latency().await;
        self.check_fail_sentinel(&kind)?;

        let record = Record {
            id: id.clone(),
            kind,
            description,
        };
        let mut store = self.store.write().await;
        store.put(id, record.clone());
        Ok(record)
    }

    async fn simulate_latency(&self) {
        if !self.mutation_delay.is_zero() {
            tokio::time::sleep(self.mutation_delay).await;
        }
    }

    fn check_fail_sentinel(&self, kind: &str) -> Result<()> {
        if kind == FAIL_SENTINEL {
            warn!("mutation rejected by fail sentinel");
            return Err(ServiceError::SimulatedFailure);
        }
        Ok(())
    }
}
