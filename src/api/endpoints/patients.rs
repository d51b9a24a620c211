//! Patient endpoints.
//!
//! - `GET /api/patients?search=&insurance=CNSS|RAMED|Private`
//! - `POST /api/patients`
//! - `DELETE /api/patients/:id`

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use super::{parse_id, DeletedResponse};
use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::{NewPatient, Patient, PatientQuery};

pub async fn list(
    State(ctx): State<ApiContext>,
    query: Result<Query<PatientQuery>, QueryRejection>,
) -> Result<Json<Vec<Patient>>, ApiError> {
    let Query(query) = query?;
    Ok(Json(ctx.core.list_patients(&query)?))
}

pub async fn create(
    State(ctx): State<ApiContext>,
    payload: Result<Json<NewPatient>, JsonRejection>,
) -> Result<(StatusCode, Json<Patient>), ApiError> {
    let Json(new) = payload?;
    let created = ctx.core.add_patient(new)?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn remove(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let id = parse_id(&id)?;
    ctx.core
        .delete_patient(id)?
        .map(|_| Json(DeletedResponse::new(id)))
        .ok_or_else(|| ApiError::patient_not_found(id))
}
