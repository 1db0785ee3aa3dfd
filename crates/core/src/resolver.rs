//! Effective shift category resolution.
//!
//! Three signal sources overlap for any (staff, date) cell: an explicit
//! shift decision, a day-off request, and the facility's weekly closure
//! day. Precedence is fixed — explicit shift, then Off-request, then
//! closure day, then the default working category — and resolution is
//! total: every cell gets exactly one category.

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, NaiveDate};
use uuid::Uuid;

use crate::models::request::{RequestKind, ShiftRequest};
use crate::models::shift::{Shift, ShiftCategory};
use crate::rules::ScheduleRules;

/// Resolves the effective category for one (staff, date) by scanning the
/// collections directly. Fine for single cells; grid passes should build
/// a [`ShiftLookup`] once instead.
pub fn effective_category(
    staff_id: Uuid,
    date: NaiveDate,
    shifts: &[Shift],
    requests: &[ShiftRequest],
    rules: &ScheduleRules,
) -> ShiftCategory {
    // 1. Explicit shift decision wins, whatever it says.
    if let Some(shift) = shifts
        .iter()
        .find(|s| s.staff_id == staff_id && s.date == date)
    {
        return shift.shift_type;
    }

    // 2. A day-off request.
    if requests
        .iter()
        .any(|r| r.staff_id == staff_id && r.date == date && r.kind == RequestKind::Off)
    {
        return ShiftCategory::Off;
    }

    // 3. The facility's weekly closure day.
    if date.weekday() == rules.closed_weekday {
        return ShiftCategory::Off;
    }

    // 4. Default working category.
    rules.default_category
}

/// Shifts and requests indexed by (staff, date) so a monthly grid pass
/// (staff count × ~30 days) resolves each cell in O(1).
///
/// Where duplicates exist the first record wins, matching the scan order
/// of [`effective_category`].
#[derive(Debug)]
pub struct ShiftLookup<'a> {
    shifts: HashMap<(Uuid, NaiveDate), &'a Shift>,
    off_requests: HashSet<(Uuid, NaiveDate)>,
}

impl<'a> ShiftLookup<'a> {
    pub fn new(shifts: &'a [Shift], requests: &'a [ShiftRequest]) -> Self {
        let mut shift_index = HashMap::with_capacity(shifts.len());
        for shift in shifts {
            shift_index
                .entry((shift.staff_id, shift.date))
                .or_insert(shift);
        }

        let off_requests = requests
            .iter()
            .filter(|r| r.kind == RequestKind::Off)
            .map(|r| (r.staff_id, r.date))
            .collect();

        Self {
            shifts: shift_index,
            off_requests,
        }
    }

    pub fn shift_for(&self, staff_id: Uuid, date: NaiveDate) -> Option<&'a Shift> {
        self.shifts.get(&(staff_id, date)).copied()
    }

    pub fn has_off_request(&self, staff_id: Uuid, date: NaiveDate) -> bool {
        self.off_requests.contains(&(staff_id, date))
    }

    /// Same precedence as [`effective_category`], against the index.
    pub fn effective_category(
        &self,
        staff_id: Uuid,
        date: NaiveDate,
        rules: &ScheduleRules,
    ) -> ShiftCategory {
        if let Some(shift) = self.shift_for(staff_id, date) {
            return shift.shift_type;
        }
        if self.has_off_request(staff_id, date) {
            return ShiftCategory::Off;
        }
        if date.weekday() == rules.closed_weekday {
            return ShiftCategory::Off;
        }
        rules.default_category
    }
}
