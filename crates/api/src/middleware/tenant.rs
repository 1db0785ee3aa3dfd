//! # Tenant Selection
//!
//! Every collection is partitioned by an owning tenant. Requests select
//! theirs with the `X-Tenant-Id` header; requests without the header fall
//! back to the server's configured default tenant. Authentication proper
//! sits in front of this service and is out of scope here.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use shiftboard_core::errors::ShiftError;

use crate::middleware::error_handling::AppError;
use crate::ApiState;

/// Header carrying the tenant id, e.g.
/// `X-Tenant-Id: 8b2d…`.
pub const TENANT_HEADER: &str = "x-tenant-id";

/// Extractor resolving the tenant a request operates on.
#[derive(Debug, Clone, Copy)]
pub struct Tenant(pub Uuid);

#[axum::async_trait]
impl FromRequestParts<Arc<ApiState>> for Tenant {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ApiState>,
    ) -> Result<Self, Self::Rejection> {
        match parts.headers.get(TENANT_HEADER) {
            Some(value) => {
                let raw = value.to_str().map_err(|_| {
                    AppError(ShiftError::Validation(
                        "X-Tenant-Id header must be valid text".to_string(),
                    ))
                })?;
                let id = Uuid::parse_str(raw).map_err(|_| {
                    AppError(ShiftError::Validation(
                        "X-Tenant-Id header must be a UUID".to_string(),
                    ))
                })?;
                Ok(Tenant(id))
            }
            None => Ok(Tenant(state.default_tenant)),
        }
    }
}
