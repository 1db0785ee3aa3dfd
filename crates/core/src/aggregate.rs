//! Headcount tallies over resolved shift categories.
//!
//! Consumers render complete rows without null checks, so every map is
//! pre-seeded with all five categories at zero.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use uuid::Uuid;

use crate::errors::{ShiftError, ShiftResult};
use crate::models::shift::ShiftCategory;
use crate::models::staff::Staff;
use crate::resolver::ShiftLookup;
use crate::rules::ScheduleRules;

/// All five categories mapped to zero.
pub fn seeded_counts() -> BTreeMap<ShiftCategory, usize> {
    ShiftCategory::ALL.iter().map(|c| (*c, 0)).collect()
}

/// Per-category headcount for one date across the whole staff list.
/// Counts always sum to `staff.len()`.
pub fn daily_counts(
    date: NaiveDate,
    staff: &[Staff],
    lookup: &ShiftLookup<'_>,
    rules: &ScheduleRules,
) -> BTreeMap<ShiftCategory, usize> {
    let mut counts = seeded_counts();
    for member in staff {
        let category = lookup.effective_category(member.id, date, rules);
        *counts.entry(category).or_insert(0) += 1;
    }
    counts
}

/// Per-category day tally for one staff member across the given days,
/// typically a whole month. Counts sum to `days.len()`.
pub fn monthly_counts(
    staff_id: Uuid,
    days: &[NaiveDate],
    lookup: &ShiftLookup<'_>,
    rules: &ScheduleRules,
) -> BTreeMap<ShiftCategory, usize> {
    let mut counts = seeded_counts();
    for date in days {
        let category = lookup.effective_category(staff_id, *date, rules);
        *counts.entry(category).or_insert(0) += 1;
    }
    counts
}

/// Every calendar date of the given month, in order.
pub fn days_in_month(year: i32, month: u32) -> ShiftResult<Vec<NaiveDate>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| ShiftError::Validation(format!("Invalid month: {year}-{month:02}")))?;

    let mut days = Vec::with_capacity(31);
    let mut current = first;
    while current.month() == month {
        days.push(current);
        current = match current.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    Ok(days)
}
