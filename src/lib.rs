//! Todo Store - A todo record service over a bounded expiring store
//!
//! Records live in a capacity-limited in-memory store with per-entry
//! TTL and LRU eviction, served over a small REST API.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_sweeper_task;
