//! Prescription endpoints.
//!
//! - `GET /api/prescriptions?search=&status=active|pending_renewal|completed`
//! - `POST /api/prescriptions`

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::{NewPrescription, Prescription, PrescriptionQuery};

pub async fn list(
    State(ctx): State<ApiContext>,
    query: Result<Query<PrescriptionQuery>, QueryRejection>,
) -> Result<Json<Vec<Prescription>>, ApiError> {
    let Query(query) = query?;
    Ok(Json(ctx.core.list_prescriptions(&query)?))
}

/// Patient must already be registered; the renewal date is set 30 days out.
pub async fn create(
    State(ctx): State<ApiContext>,
    payload: Result<Json<NewPrescription>, JsonRejection>,
) -> Result<(StatusCode, Json<Prescription>), ApiError> {
    let Json(new) = payload?;
    let created = ctx.core.add_prescription(new)?;
    Ok((StatusCode::CREATED, Json(created)))
}
