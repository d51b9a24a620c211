//! API router.
//!
//! Middleware stack (outermost → innermost):
//! 1. CORS → 2. `Cache-Control: no-store` → 3. Access log → Handler

use std::sync::Arc;

use axum::http::header::CACHE_CONTROL;
use axum::http::HeaderValue;
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;
use crate::core_state::ClinicState;

/// Build the clinic API router with every endpoint under `/api/`.
pub fn clinic_api_router(core: Arc<ClinicState>) -> Router {
    build_router(ApiContext::new(core))
}

fn build_router(ctx: ApiContext) -> Router {
    // NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
    let routes = Router::new()
        .route("/health", get(endpoints::health::check))
        .route(
            "/appointments",
            get(endpoints::appointments::list).post(endpoints::appointments::create),
        )
        .route(
            "/appointments/:id",
            get(endpoints::appointments::detail)
                .put(endpoints::appointments::update)
                .delete(endpoints::appointments::remove),
        )
        .route("/appointments/:id/cancel", post(endpoints::appointments::cancel))
        .route("/appointments/:id/restore", post(endpoints::appointments::restore))
        .route("/calendar", get(endpoints::calendar::buckets))
        .route("/calendar/week", get(endpoints::calendar::week))
        .route(
            "/patients",
            get(endpoints::patients::list).post(endpoints::patients::create),
        )
        .route("/patients/:id", delete(endpoints::patients::remove))
        .route(
            "/prescriptions",
            get(endpoints::prescriptions::list).post(endpoints::prescriptions::create),
        )
        .with_state(ctx)
        .layer(axum::middleware::from_fn(middleware::audit::log_access))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ));

    // The SPA is served from its own dev server origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new().nest("/api", routes).layer(cors)
}
