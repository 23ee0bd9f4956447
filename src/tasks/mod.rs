//! Tasks Module
//!
//! Background maintenance tasks.

mod cleanup;

pub use cleanup::spawn_sweeper_task;
