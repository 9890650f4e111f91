//! # recordbox REST API Module
//!
//! HTTP endpoints for record CRUD. Handlers delegate to the
//! [`RecordService`](crate::service::RecordService) and render its outcome
//! with a fixed status/body contract:
//!
//! | Outcome | Status |
//! |---|---|
//! | validation failure | 400 |
//! | created | 201 |
//! | read, updated, deleted, listed | 200 |
//! | missing id | 404 |
//! | duplicate id on create | 409 |
//! | store failure | 500 |

pub mod errors;
pub mod handler;
pub mod response;
pub mod server;

pub use errors::{ErrorResponse, Operation, RestError, RestResult};
pub use response::{DeleteResponse, ListResponse, RecordResponse};
pub use server::RestServer;
