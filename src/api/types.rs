//! Shared types for the REST layer.

use std::sync::Arc;

use crate::core_state::ClinicState;

/// Shared context for all API routes and middleware.
#[derive(Clone)]
pub struct ApiContext {
    pub core: Arc<ClinicState>,
}

impl ApiContext {
    pub fn new(core: Arc<ClinicState>) -> Self {
        Self { core }
    }
}

/// Request id assigned by the access-log middleware. Inserted into the
/// request extensions and echoed as `X-Request-Id`.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

impl RequestId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}
