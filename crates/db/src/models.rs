use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use eyre::eyre;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use shiftboard_core::models::assignment::TaskAssignment;
use shiftboard_core::models::request::{RequestKind, ShiftRequest};
use shiftboard_core::models::shift::Shift;
use shiftboard_core::models::staff::Staff;
use shiftboard_core::models::task_type::TaskType;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbStaff {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTaskType {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub color: String,
    pub text_color: Option<String>,
    pub duration_minutes: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbShift {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub staff_id: Uuid,
    pub date: NaiveDate,
    pub shift_type: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbShiftRequest {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub staff_id: Uuid,
    pub date: NaiveDate,
    pub request_type: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTaskAssignment {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub staff_id: Uuid,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub task_type_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<DbStaff> for Staff {
    fn from(row: DbStaff) -> Self {
        Staff {
            id: row.id,
            name: row.name,
        }
    }
}

impl TryFrom<DbTaskType> for TaskType {
    type Error = eyre::Report;

    fn try_from(row: DbTaskType) -> Result<Self, Self::Error> {
        let duration = u32::try_from(row.duration_minutes)
            .map_err(|_| eyre!("Negative duration on task type {}", row.id))?;
        Ok(TaskType {
            id: row.id,
            name: row.name,
            color: row.color,
            text_color: row.text_color,
            duration,
        })
    }
}

impl TryFrom<DbShift> for Shift {
    type Error = eyre::Report;

    fn try_from(row: DbShift) -> Result<Self, Self::Error> {
        let shift_type = row
            .shift_type
            .parse()
            .map_err(|_| eyre!("Unknown shift category {} on shift {}", row.shift_type, row.id))?;
        Ok(Shift {
            id: row.id,
            staff_id: row.staff_id,
            date: row.date,
            shift_type,
        })
    }
}

impl TryFrom<DbShiftRequest> for ShiftRequest {
    type Error = eyre::Report;

    fn try_from(row: DbShiftRequest) -> Result<Self, Self::Error> {
        let kind = match row.request_type.as_str() {
            "Off" => RequestKind::Off,
            other => return Err(eyre!("Unknown request kind {other} on request {}", row.id)),
        };
        Ok(ShiftRequest {
            id: row.id,
            staff_id: row.staff_id,
            date: row.date,
            kind,
        })
    }
}

impl From<DbTaskAssignment> for TaskAssignment {
    fn from(row: DbTaskAssignment) -> Self {
        TaskAssignment {
            id: row.id,
            staff_id: row.staff_id,
            date: row.date,
            start_time: row.start_time,
            end_time: row.end_time,
            task_type_id: row.task_type_id,
        }
    }
}
