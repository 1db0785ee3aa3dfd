use std::collections::BTreeMap;

use chrono::Weekday;

use crate::models::shift::ShiftCategory;

/// Facility-level scheduling policy.
///
/// The reference facility closes on Sundays, defaults everyone else to a
/// day shift, and staffs at least one early and two late workers per day.
/// All of it is configuration, not code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRules {
    /// Weekday on which the facility is closed; resolves to Off.
    pub closed_weekday: Weekday,
    /// Category assigned when no other signal applies.
    pub default_category: ShiftCategory,
    /// Minimum early-shift headcount per day.
    pub min_early: usize,
    /// Minimum late-shift headcount per day.
    pub min_late: usize,
    /// Task durations must be a positive multiple of this step (minutes).
    pub duration_step: u32,
}

impl Default for ScheduleRules {
    fn default() -> Self {
        Self {
            closed_weekday: Weekday::Sun,
            default_category: ShiftCategory::Day,
            min_early: 1,
            min_late: 2,
            duration_step: 10,
        }
    }
}

impl ScheduleRules {
    /// Required headcount for a category; zero for unconstrained ones.
    pub fn category_minimum(&self, category: ShiftCategory) -> usize {
        match category {
            ShiftCategory::Early => self.min_early,
            ShiftCategory::Late => self.min_late,
            _ => 0,
        }
    }

    pub fn category_is_satisfied(&self, category: ShiftCategory, count: usize) -> bool {
        count >= self.category_minimum(category)
    }

    /// Whether a day's counts meet every staffing minimum. A display
    /// flag, not a hard constraint.
    pub fn day_is_valid(&self, counts: &BTreeMap<ShiftCategory, usize>) -> bool {
        ShiftCategory::ALL
            .iter()
            .all(|c| self.category_is_satisfied(*c, counts.get(c).copied().unwrap_or(0)))
    }

    pub fn duration_is_valid(&self, duration: u32) -> bool {
        duration > 0 && duration % self.duration_step == 0
    }
}
