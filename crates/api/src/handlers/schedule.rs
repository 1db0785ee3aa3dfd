//! Shift planning, day-off requests, and schedule summaries.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shiftboard_core::aggregate;
use shiftboard_core::errors::ShiftResult;
use shiftboard_core::models::request::ShiftRequest;
use shiftboard_core::models::shift::{Shift, ShiftCategory};
use shiftboard_core::repository::ScheduleRepository;
use shiftboard_core::resolver::ShiftLookup;
use shiftboard_core::rules::ScheduleRules;
use shiftboard_db::facade::PgRepository;

use crate::middleware::{error_handling::AppError, tenant::Tenant};
use crate::ApiState;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertShiftRequest {
    pub staff_id: Uuid,
    pub date: NaiveDate,
    pub shift_type: ShiftCategory,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequestPayload {
    pub staff_id: Uuid,
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct DateFilter {
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummaryResponse {
    pub date: NaiveDate,
    pub counts: BTreeMap<ShiftCategory, usize>,
    pub valid: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummaryResponse {
    pub staff_id: Uuid,
    pub year: i32,
    pub month: u32,
    pub counts: BTreeMap<ShiftCategory, usize>,
}

pub async fn upsert_shift_on(
    repo: &dyn ScheduleRepository,
    payload: UpsertShiftRequest,
) -> ShiftResult<Shift> {
    let shift = Shift::new(payload.staff_id, payload.date, payload.shift_type);
    repo.upsert_shift(&shift).await
}

pub async fn create_request_on(
    repo: &dyn ScheduleRepository,
    payload: CreateRequestPayload,
) -> ShiftResult<ShiftRequest> {
    let request = ShiftRequest::day_off(payload.staff_id, payload.date);
    repo.insert_request(&request).await?;
    Ok(request)
}

pub async fn daily_summary_on(
    repo: &dyn ScheduleRepository,
    rules: &ScheduleRules,
    date: NaiveDate,
) -> ShiftResult<DailySummaryResponse> {
    let staff = repo.list_staff().await?;
    let shifts = repo.list_shifts().await?;
    let requests = repo.list_requests().await?;

    let lookup = ShiftLookup::new(&shifts, &requests);
    let counts = aggregate::daily_counts(date, &staff, &lookup, rules);
    let valid = rules.day_is_valid(&counts);

    Ok(DailySummaryResponse { date, counts, valid })
}

pub async fn monthly_summary_on(
    repo: &dyn ScheduleRepository,
    rules: &ScheduleRules,
    staff_id: Uuid,
    year: i32,
    month: u32,
) -> ShiftResult<MonthlySummaryResponse> {
    let days = aggregate::days_in_month(year, month)?;
    let shifts = repo.list_shifts().await?;
    let requests = repo.list_requests().await?;

    let lookup = ShiftLookup::new(&shifts, &requests);
    let counts = aggregate::monthly_counts(staff_id, &days, &lookup, rules);

    Ok(MonthlySummaryResponse {
        staff_id,
        year,
        month,
        counts,
    })
}

#[axum::debug_handler]
pub async fn list_shifts(
    State(state): State<Arc<ApiState>>,
    tenant: Tenant,
    Query(filter): Query<DateFilter>,
) -> Result<Json<Vec<Shift>>, AppError> {
    let repo = PgRepository::new(state.db_pool.clone(), tenant.0);
    let shifts = match filter.date {
        Some(date) => repo.shifts_by_date(date).await?,
        None => repo.list_shifts().await?,
    };
    Ok(Json(shifts))
}

#[axum::debug_handler]
pub async fn upsert_shift(
    State(state): State<Arc<ApiState>>,
    tenant: Tenant,
    Json(payload): Json<UpsertShiftRequest>,
) -> Result<Json<Shift>, AppError> {
    let repo = PgRepository::new(state.db_pool.clone(), tenant.0);
    Ok(Json(upsert_shift_on(&repo, payload).await?))
}

#[axum::debug_handler]
pub async fn list_requests(
    State(state): State<Arc<ApiState>>,
    tenant: Tenant,
) -> Result<Json<Vec<ShiftRequest>>, AppError> {
    let repo = PgRepository::new(state.db_pool.clone(), tenant.0);
    Ok(Json(repo.list_requests().await?))
}

#[axum::debug_handler]
pub async fn create_request(
    State(state): State<Arc<ApiState>>,
    tenant: Tenant,
    Json(payload): Json<CreateRequestPayload>,
) -> Result<Json<ShiftRequest>, AppError> {
    let repo = PgRepository::new(state.db_pool.clone(), tenant.0);
    Ok(Json(create_request_on(&repo, payload).await?))
}

#[axum::debug_handler]
pub async fn delete_request(
    State(state): State<Arc<ApiState>>,
    tenant: Tenant,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let repo = PgRepository::new(state.db_pool.clone(), tenant.0);
    repo.delete_request(id).await?;
    Ok(Json(serde_json::json!({ "deleted": id })))
}

#[axum::debug_handler]
pub async fn daily_summary(
    State(state): State<Arc<ApiState>>,
    tenant: Tenant,
    Path(date): Path<NaiveDate>,
) -> Result<Json<DailySummaryResponse>, AppError> {
    let repo = PgRepository::new(state.db_pool.clone(), tenant.0);
    Ok(Json(daily_summary_on(&repo, &state.rules, date).await?))
}

#[axum::debug_handler]
pub async fn monthly_summary(
    State(state): State<Arc<ApiState>>,
    tenant: Tenant,
    Path((staff_id, year, month)): Path<(Uuid, i32, u32)>,
) -> Result<Json<MonthlySummaryResponse>, AppError> {
    let repo = PgRepository::new(state.db_pool.clone(), tenant.0);
    Ok(Json(
        monthly_summary_on(&repo, &state.rules, staff_id, year, month).await?,
    ))
}
