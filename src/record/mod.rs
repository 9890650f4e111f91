//! # Records
//!
//! The single entity managed by recordbox, plus the validator that turns
//! raw request input into normalized write payloads.

pub mod errors;
pub mod model;
pub mod validator;

pub use errors::{ValidationError, ValidationResult};
pub use model::{Record, RecordPatch};
pub use validator::{RecordInput, RecordValidator};
