//! Locality CRUD handlers.
//!
//! Handlers take the request's `RequestContext` from the `RequestScope`
//! extractor and pass it into every repository call.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};

use localities_core::locality::Locality;
use localities_core::repository::LocalityError;

use crate::{context::RequestScope, handlers::AppError, state::AppState};

/// Acknowledgement body for update and delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub message: String,
}

impl Ack {
    fn new(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
        })
    }
}

/// Unwraps the `{code}` path segment; a non-integer segment is a bad request.
fn path_code(code: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    code.map(|Path(code)| code)
        .map_err(|rejection| LocalityError::BadRequest(rejection.body_text()).into())
}

/// Unwraps a JSON locality body; any malformed body is a bad request.
fn json_body(body: Result<Json<Locality>, JsonRejection>) -> Result<Locality, AppError> {
    body.map(|Json(locality)| locality)
        .map_err(|rejection| LocalityError::BadRequest(rejection.body_text()).into())
}

/// List all localities (GET /localities).
pub async fn list_localities(
    State(state): State<AppState>,
    RequestScope(ctx): RequestScope,
) -> Result<Json<Vec<Locality>>, AppError> {
    let localities = state.localities.list_all(&ctx).await?;

    Ok(Json(localities))
}

/// Create a locality (POST /localities).
pub async fn create_locality(
    State(state): State<AppState>,
    RequestScope(ctx): RequestScope,
    body: Result<Json<Locality>, JsonRejection>,
) -> Result<Json<Locality>, AppError> {
    let candidate = json_body(body)?;

    let created = state.localities.create(&ctx, candidate).await?;

    tracing::info!(request_id = %ctx.request_id, code = created.code, "Created locality");

    Ok(Json(created))
}

/// Get a single locality by code (GET /localities/{code}).
pub async fn get_locality(
    State(state): State<AppState>,
    RequestScope(ctx): RequestScope,
    code: Result<Path<i64>, PathRejection>,
) -> Result<Json<Locality>, AppError> {
    let code = path_code(code)?;

    let locality = state.localities.get_one(&ctx, code).await?;

    Ok(Json(locality))
}

/// Replace a locality by code (PUT /localities/{code}).
pub async fn update_locality(
    State(state): State<AppState>,
    RequestScope(ctx): RequestScope,
    code: Result<Path<i64>, PathRejection>,
    body: Result<Json<Locality>, JsonRejection>,
) -> Result<Json<Ack>, AppError> {
    let code = path_code(code)?;
    let replacement = json_body(body)?;

    state.localities.update(&ctx, code, replacement).await?;

    tracing::info!(request_id = %ctx.request_id, code, "Updated locality");

    Ok(Ack::new("Locality has been updated"))
}

/// Delete a locality by code (DELETE /localities/{code}).
pub async fn delete_locality(
    State(state): State<AppState>,
    RequestScope(ctx): RequestScope,
    code: Result<Path<i64>, PathRejection>,
) -> Result<Json<Ack>, AppError> {
    let code = path_code(code)?;

    state.localities.delete(&ctx, code).await?;

    tracing::info!(request_id = %ctx.request_id, code, "Deleted locality");

    Ok(Ack::new("Locality has been deleted"))
}
