//! Models Module
//!
//! Domain entity and HTTP request/response DTOs.

mod record;
mod requests;
mod responses;

pub use record::Record;
pub use requests::{CreateRecordRequest, UpdateRecordRequest};
pub use responses::{ErrorResponse, HealthResponse, RecordListResponse, StatsResponse};
