//! # recordbox HTTP Server Module
//!
//! Wraps the record routes in a single Axum server.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/records` - List and create
//! - `/records/{id}` - Get, update and delete
//!
//! Every response carries `Content-Type: application/json` and permissive
//! CORS headers.

pub mod config;
pub mod health_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::{HttpServer, ALLOWED_METHODS};
