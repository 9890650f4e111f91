//! # HTTP Server
//!
//! Combines the record routes and the health route, applies the header,
//! CORS and tracing layers, and serves until a shutdown signal arrives.

use std::net::SocketAddr;

use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE,
};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::observability::{log_event, Event};
use crate::rest_api::{ErrorResponse, RestServer};
use crate::service::RecordService;

use super::config::HttpServerConfig;
use super::health_routes::health_routes;

/// Methods advertised on every response
pub const ALLOWED_METHODS: &str = "OPTIONS,POST,GET,PUT,DELETE";

/// HTTP Server for recordbox
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server for `service` with the given bind settings
    pub fn new(config: HttpServerConfig, service: RecordService) -> Self {
        let router = Self::build_router(service);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(service: RecordService) -> Router {
        // Answers browser preflights; the fixed headers below are then
        // stamped over every response, preflight included.
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([
                Method::OPTIONS,
                Method::POST,
                Method::GET,
                Method::PUT,
                Method::DELETE,
            ])
            .allow_headers(Any);

        Router::new()
            .merge(health_routes(service.clone()))
            .merge(RestServer::new(service).router())
            .method_not_allowed_fallback(method_not_allowed)
            .fallback(route_not_found)
            .layer(cors)
            .layer(SetResponseHeaderLayer::overriding(
                CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static("*"),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static("*"),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static(ALLOWED_METHODS),
            ))
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C or SIGTERM
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        log_event(Event::Serving, &listener.local_addr()?.to_string());

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event(Event::ShutdownComplete, "server stopped");
        Ok(())
    }
}

async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Route not found".to_string(),
            message: None,
        }),
    )
}

/// Unsupported method on a known route. A bare OPTIONS is still answered
/// as a preflight.
async fn method_not_allowed(method: Method) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse {
            error: "Method not allowed".to_string(),
            message: None,
        }),
    )
        .into_response()
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::warn!(%error, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    log_event(Event::ShutdownStart, "signal received");
}
