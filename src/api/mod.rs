//! REST API for the clinic front end.
//!
//! Routes are nested under `/api/`, carry camelCase JSON, and go through
//! an access-log middleware. `clinic_api_router()` returns a `Router`
//! that can be mounted on any axum server instance; `server` owns the
//! listening lifecycle.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use router::clinic_api_router;
pub use server::{serve, start_api_server, ApiServer, ServerError};
pub use types::ApiContext;
