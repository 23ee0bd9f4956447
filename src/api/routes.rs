//! API Routes
//!
//! Configures the Axum router with all record service endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_record_handler, get_record_handler, health_handler, list_by_type_handler,
    list_records_handler, stats_handler, update_record_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /records` - List all live records
/// - `GET /records/type/:kind` - List records by type
/// - `GET /records/:id` - Retrieve a record by id
/// - `POST /records` - Create a record
/// - `PUT /records/:id` - Update (or create) a record at an id
/// - `GET /stats` - Get store statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/records", get(list_records_handler).post(create_record_handler))
        .route("/records/type/:kind", get(list_by_type_handler))
        .route("/records/:id", get(get_record_handler).put(update_record_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
