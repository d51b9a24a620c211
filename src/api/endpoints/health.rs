//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub appointments: usize,
    pub patients: usize,
}

/// `GET /api/health`: connection check for the front end.
pub async fn check(State(ctx): State<ApiContext>) -> Result<Json<HealthResponse>, ApiError> {
    let appointments = ctx.core.read_appointments()?.len();
    let patients = ctx.core.read_patients()?.len();

    Ok(Json(HealthResponse {
        status: "ok",
        version: crate::config::APP_VERSION,
        appointments,
        patients,
    }))
}
