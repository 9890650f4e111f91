//! Health HTTP Routes
//!
//! Liveness endpoint for load balancers and process supervisors.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::service::RecordService;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub table: String,
    pub version: &'static str,
}

/// Create health routes
pub fn health_routes(service: RecordService) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(service)
}

/// Health check handler. Does not touch the store.
async fn health_handler(State(service): State<RecordService>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        table: service.table().to_string(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
