use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One contiguous task block assigned to a staff member on a date.
///
/// `[start_time, end_time)` is a half-open same-day interval with minute
/// precision; a staff member's blocks never overlap within one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskAssignment {
    pub id: Uuid,
    pub staff_id: Uuid,
    pub date: NaiveDate,
    #[serde(with = "crate::models::time::hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "crate::models::time::hhmm")]
    pub end_time: NaiveTime,
    pub task_type_id: Uuid,
}
