//! # REST API Handlers
//!
//! One handler per route. Bodies are taken as raw bytes so an empty or
//! malformed body reaches the validator. Extractor rejections are folded
//! into the same JSON error contract.

use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;

use crate::record::{Record, ValidationError};
use crate::service::{RecordService, ServiceError};

use super::errors::{Operation, RestError, RestResult};
use super::response::{DeleteResponse, ListResponse, RecordResponse};

fn path_id(operation: Operation, path: Result<Path<String>, PathRejection>) -> RestResult<String> {
    path.map(|Path(id)| id).map_err(|rejection| {
        debug!(operation = operation.as_str(), %rejection, "path rejected");
        RestError::new(operation, ServiceError::from(ValidationError::MissingIdentifier))
    })
}

fn body_bytes(operation: Operation, body: Result<Bytes, BytesRejection>) -> RestResult<Bytes> {
    body.map_err(|rejection| {
        debug!(operation = operation.as_str(), %rejection, "body rejected");
        let err = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ValidationError::BodyTooLarge
        } else {
            ValidationError::MalformedBody
        };
        RestError::new(operation, ServiceError::from(err))
    })
}

/// `POST /records`
pub async fn create_handler(
    State(service): State<RecordService>,
    body: Result<Bytes, BytesRejection>,
) -> RestResult<(StatusCode, Json<RecordResponse>)> {
    let body = body_bytes(Operation::Create, body)?;
    let record = service
        .create(Some(&body[..]))
        .await
        .map_err(|err| RestError::new(Operation::Create, err))?;

    Ok((StatusCode::CREATED, Json(RecordResponse::created(record))))
}

/// `GET /records`
pub async fn list_handler(State(service): State<RecordService>) -> RestResult<Json<ListResponse>> {
    let output = service
        .list()
        .await
        .map_err(|err| RestError::new(Operation::List, err))?;

    Ok(Json(ListResponse::from(output)))
}

/// `GET /records/{id}`
pub async fn get_handler(
    State(service): State<RecordService>,
    path: Result<Path<String>, PathRejection>,
) -> RestResult<Json<Record>> {
    let id = path_id(Operation::Get, path)?;
    let record = service
        .get(Some(id.as_str()))
        .await
        .map_err(|err| RestError::new(Operation::Get, err))?;

    Ok(Json(record))
}

/// `PUT /records/{id}`
pub async fn update_handler(
    State(service): State<RecordService>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> RestResult<Json<RecordResponse>> {
    let id = path_id(Operation::Update, path)?;
    let body = body_bytes(Operation::Update, body)?;
    let record = service
        .update(Some(id.as_str()), Some(&body[..]))
        .await
        .map_err(|err| RestError::new(Operation::Update, err))?;

    Ok(Json(RecordResponse::updated(record)))
}

/// `DELETE /records/{id}`
pub async fn delete_handler(
    State(service): State<RecordService>,
    path: Result<Path<String>, PathRejection>,
) -> RestResult<Json<DeleteResponse>> {
    let id = path_id(Operation::Delete, path)?;
    let record = service
        .delete(Some(id.as_str()))
        .await
        .map_err(|err| RestError::new(Operation::Delete, err))?;

    Ok(Json(DeleteResponse::new(record)))
}
