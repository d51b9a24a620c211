//! Access logging middleware.
//!
//! Logs every API request with a request id, method, path, response
//! status and latency. The id is echoed back as `X-Request-Id`.

use std::time::{Duration, Instant};

use axum::http::{HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;

use crate::api::types::RequestId;

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

pub async fn log_access(mut req: Request<axum::body::Body>, next: Next) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let request_id = RequestId::generate();
    req.extensions_mut().insert(request_id.clone());

    let started = Instant::now();
    let mut response = next.run(req).await;
    let status = response.status().as_u16();
    let elapsed_ms = whole_millis(started.elapsed());

    if response.status().is_server_error() {
        tracing::warn!(request_id = %request_id.0, %method, %path, status, elapsed_ms, "API request failed");
    } else {
        tracing::info!(request_id = %request_id.0, %method, %path, status, elapsed_ms, "API request");
    }

    if let Ok(val) = HeaderValue::from_str(&request_id.0) {
        response.headers_mut().insert(REQUEST_ID_HEADER, val);
    }
    response
}

/// Saturates instead of truncating for durations beyond `u64` milliseconds.
fn whole_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
