//! Daily task-board operations: placing, toggling off, copying, pasting,
//! and clearing task blocks.
//!
//! Placement is strictly overlap-checked per staff member and date.
//! Paste is not — stamping a copied day template on top of existing
//! blocks is the intended workflow.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use shiftboard_core::assignment::{self, Clipboard};
use shiftboard_core::errors::{ShiftError, ShiftResult};
use shiftboard_core::models::assignment::TaskAssignment;
use shiftboard_core::models::time::format_hhmm;
use shiftboard_core::repository::ScheduleRepository;
use shiftboard_db::facade::PgRepository;

use crate::middleware::{error_handling::AppError, tenant::Tenant};
use crate::ApiState;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceAssignmentRequest {
    pub staff_id: Uuid,
    pub date: NaiveDate,
    #[serde(with = "shiftboard_core::models::time::hhmm")]
    pub start_time: NaiveTime,
    pub task_type_id: Uuid,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickRequest {
    pub staff_id: Uuid,
    pub date: NaiveDate,
    #[serde(with = "shiftboard_core::models::time::hhmm")]
    pub time: NaiveTime,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyRequest {
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasteRequest {
    pub target_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct DateFilter {
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickResponse {
    pub removed: Option<TaskAssignment>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CopyResponse {
    pub copied: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub removed: usize,
}

pub async fn place_on(
    repo: &dyn ScheduleRepository,
    payload: PlaceAssignmentRequest,
) -> ShiftResult<TaskAssignment> {
    let task_type = repo
        .list_task_types()
        .await?
        .into_iter()
        .find(|t| t.id == payload.task_type_id)
        .ok_or_else(|| {
            ShiftError::NotFound(format!(
                "Task type with ID {} not found",
                payload.task_type_id
            ))
        })?;

    let candidate = assignment::build_assignment(
        payload.staff_id,
        payload.date,
        payload.start_time,
        &task_type,
    )?;

    let existing = repo.assignments_by_date(payload.date).await?;
    if let Some(other) = assignment::find_conflict(&candidate, &existing) {
        return Err(ShiftError::Conflict(format!(
            "Overlaps an existing task ({} - {})",
            format_hhmm(other.start_time),
            format_hhmm(other.end_time),
        )));
    }

    repo.insert_assignment(&candidate).await?;
    Ok(candidate)
}

pub async fn click_on(
    repo: &dyn ScheduleRepository,
    payload: ClickRequest,
) -> ShiftResult<Option<TaskAssignment>> {
    let existing = repo.assignments_by_date(payload.date).await?;
    let Some(found) =
        assignment::find_covering(&existing, payload.staff_id, payload.date, payload.time)
    else {
        // Clicking an empty slot removes nothing.
        return Ok(None);
    };
    let removed = found.clone();

    repo.delete_assignment(removed.id).await?;
    Ok(Some(removed))
}

pub async fn copy_on(
    repo: &dyn ScheduleRepository,
    clipboard: &RwLock<Clipboard>,
    date: NaiveDate,
) -> ShiftResult<usize> {
    let day = repo.assignments_by_date(date).await?;
    let mut clipboard = clipboard.write().await;
    clipboard.copy(&day);
    Ok(day.len())
}

pub async fn paste_on(
    repo: &dyn ScheduleRepository,
    clipboard: &RwLock<Clipboard>,
    target_date: NaiveDate,
) -> ShiftResult<Vec<TaskAssignment>> {
    let pasted = clipboard.read().await.paste(target_date);
    if pasted.is_empty() {
        return Ok(pasted);
    }

    repo.bulk_insert_assignments(&pasted).await?;
    Ok(pasted)
}

#[axum::debug_handler]
pub async fn list_assignments(
    State(state): State<Arc<ApiState>>,
    tenant: Tenant,
    Query(filter): Query<DateFilter>,
) -> Result<Json<Vec<TaskAssignment>>, AppError> {
    let repo = PgRepository::new(state.db_pool.clone(), tenant.0);
    let assignments = match filter.date {
        Some(date) => repo.assignments_by_date(date).await?,
        None => repo.list_assignments().await?,
    };
    Ok(Json(assignments))
}

#[axum::debug_handler]
pub async fn place_assignment(
    State(state): State<Arc<ApiState>>,
    tenant: Tenant,
    Json(payload): Json<PlaceAssignmentRequest>,
) -> Result<Json<TaskAssignment>, AppError> {
    let repo = PgRepository::new(state.db_pool.clone(), tenant.0);
    Ok(Json(place_on(&repo, payload).await?))
}

#[axum::debug_handler]
pub async fn click_assignment(
    State(state): State<Arc<ApiState>>,
    tenant: Tenant,
    Json(payload): Json<ClickRequest>,
) -> Result<Json<ClickResponse>, AppError> {
    let repo = PgRepository::new(state.db_pool.clone(), tenant.0);
    let removed = click_on(&repo, payload).await?;
    Ok(Json(ClickResponse { removed }))
}

#[axum::debug_handler]
pub async fn delete_assignment(
    State(state): State<Arc<ApiState>>,
    tenant: Tenant,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let repo = PgRepository::new(state.db_pool.clone(), tenant.0);
    repo.delete_assignment(id).await?;
    Ok(Json(serde_json::json!({ "deleted": id })))
}

#[axum::debug_handler]
pub async fn copy_assignments(
    State(state): State<Arc<ApiState>>,
    tenant: Tenant,
    Json(payload): Json<CopyRequest>,
) -> Result<Json<CopyResponse>, AppError> {
    let repo = PgRepository::new(state.db_pool.clone(), tenant.0);
    let copied = copy_on(&repo, &state.clipboard, payload.date).await?;
    Ok(Json(CopyResponse { copied }))
}

#[axum::debug_handler]
pub async fn paste_assignments(
    State(state): State<Arc<ApiState>>,
    tenant: Tenant,
    Json(payload): Json<PasteRequest>,
) -> Result<Json<Vec<TaskAssignment>>, AppError> {
    let repo = PgRepository::new(state.db_pool.clone(), tenant.0);
    Ok(Json(
        paste_on(&repo, &state.clipboard, payload.target_date).await?,
    ))
}

#[axum::debug_handler]
pub async fn clear_assignments(
    State(state): State<Arc<ApiState>>,
    tenant: Tenant,
    Query(filter): Query<DateFilter>,
) -> Result<Json<ClearResponse>, AppError> {
    let date = filter.date.ok_or_else(|| {
        AppError(ShiftError::Validation(
            "A date query parameter is required to clear assignments".to_string(),
        ))
    })?;

    let repo = PgRepository::new(state.db_pool.clone(), tenant.0);
    let removed = repo.delete_assignments_by_date(date).await?;
    Ok(Json(ClearResponse { removed }))
}
