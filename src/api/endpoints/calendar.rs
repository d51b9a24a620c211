//! Calendar endpoints.
//!
//! - `GET /api/calendar`: every appointment grouped by date
//! - `GET /api/calendar/week?date=YYYY-MM-DD`: the Sunday-first week
//!   containing `date` (default today), with per-day status indicators

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::schedule;

#[derive(Debug, Deserialize)]
pub struct WeekQuery {
    pub date: Option<NaiveDate>,
}

/// `GET /api/calendar`: `{ "YYYY-MM-DD": [appointment, ...], ... }`,
/// dates ascending, each day ordered by time.
pub async fn buckets(State(ctx): State<ApiContext>) -> Result<Json<serde_json::Value>, ApiError> {
    let book = ctx.core.read_appointments()?;
    let value = serde_json::to_value(book.buckets())
        .map_err(|e| ApiError::Internal(format!("calendar serialization: {e}")))?;
    Ok(Json(value))
}

/// `GET /api/calendar/week`
pub async fn week(
    State(ctx): State<ApiContext>,
    query: Result<Query<WeekQuery>, QueryRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Query(query) = query?;
    let today = ctx.core.today();
    let anchor = query.date.unwrap_or(today);

    let book = ctx.core.read_appointments()?;
    let buckets = book.buckets();
    let days = schedule::week_view(&buckets, anchor, today)
        .ok_or_else(|| ApiError::BadRequest(format!("Date out of range: {anchor}")))?;
    let value = serde_json::to_value(days)
        .map_err(|e| ApiError::Internal(format!("week view serialization: {e}")))?;
    Ok(Json(value))
}
