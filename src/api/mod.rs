//! API Module
//!
//! HTTP handlers and routing for the record service REST API.
//!
//! # Endpoints
//! - `GET /records` - List all live records
//! - `GET /records/type/:kind` - List records by type
//! - `GET /records/:id` - Retrieve a record by id
//! - `POST /records` - Create a record
//! - `PUT /records/:id` - Update (or create) a record at an id
//! - `GET /stats` - Get store statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
