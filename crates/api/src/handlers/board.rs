//! The daily task-board projection: working staff (everyone whose
//! effective category is not Off) with their day's task blocks and the
//! 30-minute slot header.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use serde::Serialize;

use shiftboard_core::assignment::time_slots;
use shiftboard_core::errors::ShiftResult;
use shiftboard_core::models::assignment::TaskAssignment;
use shiftboard_core::models::shift::{shift_type_catalog, ShiftCategory, ShiftTypeDefinition};
use shiftboard_core::models::staff::Staff;
use shiftboard_core::models::time::format_hhmm;
use shiftboard_core::repository::ScheduleRepository;
use shiftboard_core::resolver::ShiftLookup;
use shiftboard_core::rules::ScheduleRules;
use shiftboard_db::facade::PgRepository;

use crate::middleware::{error_handling::AppError, tenant::Tenant};
use crate::ApiState;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardRow {
    pub staff: Staff,
    pub shift_type: ShiftCategory,
    pub assignments: Vec<TaskAssignment>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardResponse {
    pub date: NaiveDate,
    pub slots: Vec<String>,
    pub shift_types: Vec<ShiftTypeDefinition>,
    pub rows: Vec<BoardRow>,
}

pub async fn board_on(
    repo: &dyn ScheduleRepository,
    rules: &ScheduleRules,
    date: NaiveDate,
) -> ShiftResult<BoardResponse> {
    let staff = repo.list_staff().await?;
    let shifts = repo.list_shifts().await?;
    let requests = repo.list_requests().await?;
    let assignments = repo.assignments_by_date(date).await?;

    let lookup = ShiftLookup::new(&shifts, &requests);
    let rows = staff
        .into_iter()
        .filter_map(|member| {
            let shift_type = lookup.effective_category(member.id, date, rules);
            if shift_type == ShiftCategory::Off {
                return None;
            }
            let member_assignments = assignments
                .iter()
                .filter(|a| a.staff_id == member.id)
                .cloned()
                .collect();
            Some(BoardRow {
                staff: member,
                shift_type,
                assignments: member_assignments,
            })
        })
        .collect();

    Ok(BoardResponse {
        date,
        slots: time_slots().into_iter().map(format_hhmm).collect(),
        shift_types: shift_type_catalog(),
        rows,
    })
}

#[axum::debug_handler]
pub async fn get_board(
    State(state): State<Arc<ApiState>>,
    tenant: Tenant,
    Path(date): Path<NaiveDate>,
) -> Result<Json<BoardResponse>, AppError> {
    let repo = PgRepository::new(state.db_pool.clone(), tenant.0);
    Ok(Json(board_on(&repo, &state.rules, date).await?))
}
