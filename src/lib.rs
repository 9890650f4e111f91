//! recordbox - a record management HTTP service over a key-value table
//!
//! Every write is conditional on the current state of the table:
//! create requires the id to be absent, update and delete require it to
//! exist. Failures map to a fixed HTTP error contract.

pub mod cli;
pub mod config;
pub mod http_server;
pub mod observability;
pub mod record;
pub mod rest_api;
pub mod service;
pub mod store;
