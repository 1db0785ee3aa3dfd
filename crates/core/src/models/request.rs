use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a staff member is asking for on a date. Only day-off requests are
/// modeled; working-preference kinds would slot in here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestKind {
    Off,
}

impl RequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::Off => "Off",
        }
    }
}

/// A staff member's day-off request, collected ahead of shift planning.
///
/// At most one request exists per (staff, date); duplicate inserts are
/// rejected so resolution stays deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRequest {
    pub id: Uuid,
    pub staff_id: Uuid,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: RequestKind,
}

impl ShiftRequest {
    pub fn day_off(staff_id: Uuid, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            staff_id,
            date,
            kind: RequestKind::Off,
        }
    }
}
