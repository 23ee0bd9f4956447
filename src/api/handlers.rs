//! API Handlers
//!
//! HTTP request handlers for each record service endpoint. The handlers
//! are thin glue: argument validation and error-to-response mapping
//! around the service operations.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::{Result, ServiceError};
use crate::models::{
    CreateRecordRequest, HealthResponse, Record, RecordListResponse, StatsResponse,
    UpdateRecordRequest,
};
use crate::service::RecordService;
use crate::store::RecordStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The record service; clones share one store instance
    pub service: RecordService,
}

impl AppState {
    /// Creates a new AppState wrapping the given service.
    pub fn new(service: RecordService) -> Self {
        Self { service }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the store instance here and injects it into the service;
    /// there is exactly one store per process.
    pub fn from_config(config: &crate::config::Config) -> Self {
        let store = Arc::new(RwLock::new(RecordStore::new(
            config.max_records,
            Duration::from_secs(config.record_ttl),
        )));
        let service =
            RecordService::new(store, Duration::from_millis(config.mutation_delay_ms));
        Self::new(service)
    }
}

/// Handler for GET /records
///
/// Lists all live records.
pub async fn list_records_handler(State(state): State<AppState>) -> Json<RecordListResponse> {
    let records = state.service.list_all().await;
    Json(RecordListResponse::new(records))
}

/// Handler for GET /records/type/:kind
///
/// Lists live records whose type equals the path segment exactly.
pub async fn list_by_type_handler(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Json<RecordListResponse> {
    let records = state.service.list_by_type(&kind).await;
    Json(RecordListResponse::new(records))
}

/// Handler for GET /records/:id
///
/// Returns the record at the given id, or 404 when absent. Absence is a
/// normal service outcome; only this layer turns it into an error.
pub async fn get_record_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Record>> {
    match state.service.get_by_id(&id).await {
        Some(record) => Ok(Json(record)),
        None => Err(ServiceError::NotFound(id)),
    }
}

/// Handler for POST /records
///
/// Creates a record with a service-assigned id. Returns 201 with the
/// record, or 500 after the full mutation delay when the type is the
/// fail sentinel.
pub async fn create_record_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateRecordRequest>,
) -> Result<(StatusCode, Json<Record>)> {
    if let Some(error_msg) = req.validate() {
        return Err(ServiceError::InvalidRequest(error_msg));
    }

    let record = state.service.create(req.kind, req.description).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Handler for PUT /records/:id
///
/// Writes a record under the caller-supplied id, creating it if absent.
pub async fn update_record_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateRecordRequest>,
) -> Result<Json<Record>> {
    if let Some(error_msg) = req.validate() {
        return Err(ServiceError::InvalidRequest(error_msg));
    }

    let record = state.service.update(id, req.kind, req.description).await?;
    Ok(Json(record))
}

/// Handler for GET /stats
///
/// Returns current store statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let store = state.service.store();
    let stats = {
        let store = store.read().await;
        store.stats()
    };
    Json(StatsResponse::new(stats))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> AppState {
        AppState::from_config(&crate::config::Config::default())
    }

    #[tokio::test]
    async fn test_create_and_get_handler() {
        let state = test_state();

        let req = CreateRecordRequest {
            kind: "todo".to_string(),
            description: "buy milk".to_string(),
        };
        let (status, Json(created)) =
            create_record_handler(State(state.clone()), Json(req)).await.unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let result = get_record_handler(State(state), Path(created.id.clone())).await;
        let Json(found) = result.unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.description, "buy milk");
    }

    #[tokio::test]
    async fn test_get_absent_record_is_404() {
        let state = test_state();

        let result = get_record_handler(State(state), Path("missing".to_string())).await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_fail_sentinel() {
        let state = test_state();

        let req = CreateRecordRequest {
            kind: "fail".to_string(),
            description: "x".to_string(),
        };
        let result = create_record_handler(State(state.clone()), Json(req)).await;
        assert!(matches!(result, Err(ServiceError::SimulatedFailure)));

        let Json(list) = list_records_handler(State(state)).await;
        assert_eq!(list.count, 0);
    }

    #[tokio::test]
    async fn test_update_handler_creates_when_absent() {
        let state = test_state();

        let req = UpdateRecordRequest {
            kind: "todo".to_string(),
            description: "x".to_string(),
        };
        let result =
            update_record_handler(State(state.clone()), Path("fresh".to_string()), Json(req))
                .await;
        let Json(record) = result.unwrap();
        assert_eq!(record.id, "fresh");

        let Json(list) = list_records_handler(State(state)).await;
        assert_eq!(list.count, 1);
    }

    #[tokio::test]
    async fn test_create_invalid_request() {
        let state = test_state();

        let req = CreateRecordRequest {
            kind: "".to_string(), // Empty type is invalid
            description: "x".to_string(),
        };
        let result = create_record_handler(State(state), Json(req)).await;
        assert!(matches!(result, Err(ServiceError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = test_state();

        let Json(response) = stats_handler(State(state)).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 0);
        assert_eq!(response.live_entries, 0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let Json(response) = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
