//! Task-block interval logic for the daily board.
//!
//! All intervals are half-open `[start, end)` with minute precision and
//! never cross midnight. The board renders a 07:00–20:00 window in
//! 30-minute slots, but placement accepts arbitrary minute values —
//! task durations step in 10-minute increments and need not align to the
//! display grid.

use chrono::{Duration, NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::errors::{ShiftError, ShiftResult};
use crate::models::assignment::TaskAssignment;
use crate::models::task_type::TaskType;
use crate::models::time::format_hhmm;

/// First hour of the display window.
pub const BOARD_START_HOUR: u32 = 7;
/// Hour the display window ends (exclusive).
pub const BOARD_END_HOUR: u32 = 20;
/// Width of one display slot in minutes.
pub const SLOT_MINUTES: u32 = 30;

/// The 30-minute slot boundaries of the display window, 07:00 through
/// 19:30.
pub fn time_slots() -> Vec<NaiveTime> {
    let mut slots = Vec::new();
    for hour in BOARD_START_HOUR..BOARD_END_HOUR {
        for minute in (0..60).step_by(SLOT_MINUTES as usize) {
            if let Some(slot) = NaiveTime::from_hms_opt(hour, minute, 0) {
                slots.push(slot);
            }
        }
    }
    slots
}

/// Half-open interval overlap: `[a_start, a_end)` against
/// `[b_start, b_end)`. Touching endpoints do not overlap.
pub fn overlaps(
    a_start: NaiveTime,
    a_end: NaiveTime,
    b_start: NaiveTime,
    b_end: NaiveTime,
) -> bool {
    a_start < b_end && a_end > b_start
}

/// Builds a candidate assignment: end = start + the task's duration.
/// Rejects blocks that would run past midnight; assignments are same-day
/// only.
pub fn build_assignment(
    staff_id: Uuid,
    date: NaiveDate,
    start_time: NaiveTime,
    task_type: &TaskType,
) -> ShiftResult<TaskAssignment> {
    if task_type.duration == 0 {
        return Err(ShiftError::Validation(format!(
            "Task type {} has no duration",
            task_type.name
        )));
    }

    let (end_time, wrapped) =
        start_time.overflowing_add_signed(Duration::minutes(i64::from(task_type.duration)));
    if wrapped != 0 {
        return Err(ShiftError::Validation(format!(
            "Task starting at {} would run past midnight",
            format_hhmm(start_time)
        )));
    }

    Ok(TaskAssignment {
        id: Uuid::new_v4(),
        staff_id,
        date,
        start_time,
        end_time,
        task_type_id: task_type.id,
    })
}

/// First existing block of the same staff member on the same date whose
/// interval overlaps the candidate. `None` means the placement is clear.
pub fn find_conflict<'a>(
    candidate: &TaskAssignment,
    existing: &'a [TaskAssignment],
) -> Option<&'a TaskAssignment> {
    existing.iter().find(|a| {
        a.id != candidate.id
            && a.staff_id == candidate.staff_id
            && a.date == candidate.date
            && overlaps(candidate.start_time, candidate.end_time, a.start_time, a.end_time)
    })
}

/// The assignment whose interval contains `time` for that staff member on
/// that date. Clicking a filled slot resolves through this to toggle the
/// block off.
pub fn find_covering<'a>(
    assignments: &'a [TaskAssignment],
    staff_id: Uuid,
    date: NaiveDate,
    time: NaiveTime,
) -> Option<&'a TaskAssignment> {
    assignments.iter().find(|a| {
        a.staff_id == staff_id && a.date == date && time >= a.start_time && time < a.end_time
    })
}

/// Session-scoped holding area for day-template copy/paste.
///
/// One clipboard per session; copying replaces whatever was held before.
/// Pasting re-keys every entry with a fresh id and the target date, and
/// deliberately skips overlap checks — stamping a template onto a day
/// that already has blocks is the expected workflow.
#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    copied: Option<Vec<TaskAssignment>>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.copied.as_ref().map_or(true, Vec::is_empty)
    }

    /// Number of held assignments.
    pub fn len(&self) -> usize {
        self.copied.as_ref().map_or(0, Vec::len)
    }

    /// Snapshots the given assignments by value, replacing any previous
    /// clipboard content.
    pub fn copy(&mut self, assignments: &[TaskAssignment]) {
        self.copied = Some(assignments.to_vec());
    }

    /// Produces fresh records for `target_date`: new id per entry, date
    /// rewritten, staff/time/task-type preserved. Pasting twice yields
    /// two independent sets of ids. Empty clipboard pastes nothing.
    pub fn paste(&self, target_date: NaiveDate) -> Vec<TaskAssignment> {
        match &self.copied {
            Some(entries) => entries
                .iter()
                .map(|a| TaskAssignment {
                    id: Uuid::new_v4(),
                    date: target_date,
                    ..a.clone()
                })
                .collect(),
            None => Vec::new(),
        }
    }
}
