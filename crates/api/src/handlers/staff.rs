use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use shiftboard_core::errors::{ShiftError, ShiftResult};
use shiftboard_core::models::staff::Staff;
use shiftboard_core::repository::ScheduleRepository;
use shiftboard_db::facade::PgRepository;

use crate::middleware::{error_handling::AppError, tenant::Tenant};
use crate::ApiState;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateStaffRequest {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStaffRequest {
    pub name: String,
}

pub async fn create_staff_on(
    repo: &dyn ScheduleRepository,
    name: &str,
) -> ShiftResult<Staff> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ShiftError::Validation(
            "Staff name must not be blank".to_string(),
        ));
    }

    let staff = Staff::new(name);
    repo.insert_staff(&staff).await?;
    Ok(staff)
}

pub async fn update_staff_on(
    repo: &dyn ScheduleRepository,
    id: Uuid,
    name: &str,
) -> ShiftResult<Staff> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ShiftError::Validation(
            "Staff name must not be blank".to_string(),
        ));
    }

    let staff = Staff {
        id,
        name: name.to_string(),
    };
    repo.update_staff(&staff).await?;
    Ok(staff)
}

#[axum::debug_handler]
pub async fn list_staff(
    State(state): State<Arc<ApiState>>,
    tenant: Tenant,
) -> Result<Json<Vec<Staff>>, AppError> {
    let repo = PgRepository::new(state.db_pool.clone(), tenant.0);
    Ok(Json(repo.list_staff().await?))
}

#[axum::debug_handler]
pub async fn create_staff(
    State(state): State<Arc<ApiState>>,
    tenant: Tenant,
    Json(payload): Json<CreateStaffRequest>,
) -> Result<Json<Staff>, AppError> {
    let repo = PgRepository::new(state.db_pool.clone(), tenant.0);
    Ok(Json(create_staff_on(&repo, &payload.name).await?))
}

#[axum::debug_handler]
pub async fn update_staff(
    State(state): State<Arc<ApiState>>,
    tenant: Tenant,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStaffRequest>,
) -> Result<Json<Staff>, AppError> {
    let repo = PgRepository::new(state.db_pool.clone(), tenant.0);
    Ok(Json(update_staff_on(&repo, id, &payload.name).await?))
}

#[axum::debug_handler]
pub async fn delete_staff(
    State(state): State<Arc<ApiState>>,
    tenant: Tenant,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let repo = PgRepository::new(state.db_pool.clone(), tenant.0);
    repo.delete_staff(id).await?;
    Ok(Json(serde_json::json!({ "deleted": id })))
}
