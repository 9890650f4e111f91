//! # REST API Routes
//!
//! Axum router for the record endpoints.

use axum::routing::get;
use axum::Router;

use crate::service::RecordService;

use super::handler::{create_handler, delete_handler, get_handler, list_handler, update_handler};

/// REST API server state
pub struct RestServer {
    service: RecordService,
}

impl RestServer {
    pub fn new(service: RecordService) -> Self {
        Self { service }
    }

    /// Build the Axum router
    pub fn router(self) -> Router {
        Router::new()
            .route("/records", get(list_handler).post(create_handler))
            .route(
                "/records/{id}",
                get(get_handler).put(update_handler).delete(delete_handler),
            )
            .with_state(self.service)
    }
}
