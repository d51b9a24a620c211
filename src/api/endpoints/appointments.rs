//! Appointment endpoints.
//!
//! - `GET /api/appointments`: selected-date and status-tab filtered list
//! - `POST /api/appointments`: schedule (always `confirmed`)
//! - `GET|PUT|DELETE /api/appointments/:id`
//! - `POST /api/appointments/:id/cancel`, `POST /api/appointments/:id/restore`

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use super::{parse_id, DeletedResponse};
use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::{Appointment, AppointmentPatch, AppointmentQuery, NewAppointment};

/// `GET /api/appointments?date=YYYY-MM-DD&tab=upcoming|all|canceled`
pub async fn list(
    State(ctx): State<ApiContext>,
    query: Result<Query<AppointmentQuery>, QueryRejection>,
) -> Result<Json<Vec<Appointment>>, ApiError> {
    let Query(query) = query?;
    Ok(Json(ctx.core.list_appointments(query)?))
}

/// `POST /api/appointments`
pub async fn create(
    State(ctx): State<ApiContext>,
    payload: Result<Json<NewAppointment>, JsonRejection>,
) -> Result<(StatusCode, Json<Appointment>), ApiError> {
    let Json(new) = payload?;
    let created = ctx.core.add_appointment(new)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/appointments/:id`
pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<Appointment>, ApiError> {
    let id = parse_id(&id)?;
    ctx.core
        .get_appointment(id)?
        .map(Json)
        .ok_or_else(|| ApiError::appointment_not_found(id))
}

/// `PUT /api/appointments/:id`: partial update, returns the stored record.
pub async fn update(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
    payload: Result<Json<AppointmentPatch>, JsonRejection>,
) -> Result<Json<Appointment>, ApiError> {
    let id = parse_id(&id)?;
    let Json(patch) = payload?;
    ctx.core
        .update_appointment(id, patch)?
        .map(Json)
        .ok_or_else(|| ApiError::appointment_not_found(id))
}

/// `POST /api/appointments/:id/cancel`
pub async fn cancel(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<Appointment>, ApiError> {
    let id = parse_id(&id)?;
    ctx.core
        .cancel_appointment(id)?
        .map(Json)
        .ok_or_else(|| ApiError::appointment_not_found(id))
}

/// `POST /api/appointments/:id/restore`: back to `confirmed`, whatever
/// the status was.
pub async fn restore(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<Appointment>, ApiError> {
    let id = parse_id(&id)?;
    ctx.core
        .restore_appointment(id)?
        .map(Json)
        .ok_or_else(|| ApiError::appointment_not_found(id))
}

/// `DELETE /api/appointments/:id`
pub async fn remove(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let id = parse_id(&id)?;
    ctx.core
        .delete_appointment(id)?
        .map(|_| Json(DeletedResponse::new(id)))
        .ok_or_else(|| ApiError::appointment_not_found(id))
}
