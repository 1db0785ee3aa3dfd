use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use shiftboard_core::errors::{ShiftError, ShiftResult};
use shiftboard_core::models::task_type::TaskType;
use shiftboard_core::repository::ScheduleRepository;
use shiftboard_core::rules::ScheduleRules;
use shiftboard_db::facade::PgRepository;

use crate::middleware::{error_handling::AppError, tenant::Tenant};
use crate::ApiState;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskTypeRequest {
    pub name: String,
    pub color: String,
    pub text_color: Option<String>,
    pub duration: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskTypeRequest {
    pub name: String,
    pub color: String,
    pub text_color: Option<String>,
    pub duration: u32,
}

fn validate(rules: &ScheduleRules, name: &str, duration: u32) -> ShiftResult<()> {
    if name.trim().is_empty() {
        return Err(ShiftError::Validation(
            "Task name must not be blank".to_string(),
        ));
    }
    if !rules.duration_is_valid(duration) {
        return Err(ShiftError::Validation(format!(
            "Duration must be a positive multiple of {} minutes",
            rules.duration_step
        )));
    }
    Ok(())
}

pub async fn create_task_type_on(
    repo: &dyn ScheduleRepository,
    rules: &ScheduleRules,
    payload: CreateTaskTypeRequest,
) -> ShiftResult<TaskType> {
    validate(rules, &payload.name, payload.duration)?;

    let mut task_type = TaskType::new(payload.name.trim(), payload.color, payload.duration);
    task_type.text_color = payload.text_color;
    repo.insert_task_type(&task_type).await?;
    Ok(task_type)
}

pub async fn update_task_type_on(
    repo: &dyn ScheduleRepository,
    rules: &ScheduleRules,
    id: Uuid,
    payload: UpdateTaskTypeRequest,
) -> ShiftResult<TaskType> {
    validate(rules, &payload.name, payload.duration)?;

    let task_type = TaskType {
        id,
        name: payload.name.trim().to_string(),
        color: payload.color,
        text_color: payload.text_color,
        duration: payload.duration,
    };
    repo.update_task_type(&task_type).await?;
    Ok(task_type)
}

#[axum::debug_handler]
pub async fn list_task_types(
    State(state): State<Arc<ApiState>>,
    tenant: Tenant,
) -> Result<Json<Vec<TaskType>>, AppError> {
    let repo = PgRepository::new(state.db_pool.clone(), tenant.0);
    Ok(Json(repo.list_task_types().await?))
}

#[axum::debug_handler]
pub async fn create_task_type(
    State(state): State<Arc<ApiState>>,
    tenant: Tenant,
    Json(payload): Json<CreateTaskTypeRequest>,
) -> Result<Json<TaskType>, AppError> {
    let repo = PgRepository::new(state.db_pool.clone(), tenant.0);
    Ok(Json(
        create_task_type_on(&repo, &state.rules, payload).await?,
    ))
}

#[axum::debug_handler]
pub async fn update_task_type(
    State(state): State<Arc<ApiState>>,
    tenant: Tenant,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTaskTypeRequest>,
) -> Result<Json<TaskType>, AppError> {
    let repo = PgRepository::new(state.db_pool.clone(), tenant.0);
    Ok(Json(
        update_task_type_on(&repo, &state.rules, id, payload).await?,
    ))
}

#[axum::debug_handler]
pub async fn delete_task_type(
    State(state): State<Arc<ApiState>>,
    tenant: Tenant,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let repo = PgRepository::new(state.db_pool.clone(), tenant.0);
    repo.delete_task_type(id).await?;
    Ok(Json(serde_json::json!({ "deleted": id })))
}
