//! Service Module
//!
//! Domain operations layered on the record store.

mod records;

pub use records::{RecordService, FAIL_SENTINEL};
