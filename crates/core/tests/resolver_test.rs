use chrono::{NaiveDate, Weekday};
use pretty_assertions::assert_eq;
use rstest::rstest;
use uuid::Uuid;

use shiftboard_core::models::request::ShiftRequest;
use shiftboard_core::models::shift::{Shift, ShiftCategory};
use shiftboard_core::resolver::{effective_category, ShiftLookup};
use shiftboard_core::rules::ScheduleRules;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn explicit_shift_wins_over_off_request() {
    let staff_id = Uuid::new_v4();
    // 2025-06-04 is a Wednesday.
    let day = date(2025, 6, 4);

    let shifts = vec![Shift::new(staff_id, day, ShiftCategory::Early)];
    let requests = vec![ShiftRequest::day_off(staff_id, day)];
    let rules = ScheduleRules::default();

    let resolved = effective_category(staff_id, day, &shifts, &requests, &rules);
    assert_eq!(resolved, ShiftCategory::Early);
}

#[test]
fn explicit_off_shift_is_returned_verbatim() {
    let staff_id = Uuid::new_v4();
    let day = date(2025, 6, 4);

    let shifts = vec![Shift::new(staff_id, day, ShiftCategory::Off)];
    let rules = ScheduleRules::default();

    assert_eq!(
        effective_category(staff_id, day, &shifts, &[], &rules),
        ShiftCategory::Off
    );
}

#[rstest]
#[case(ShiftCategory::Day)]
#[case(ShiftCategory::Off)]
#[case(ShiftCategory::Early)]
#[case(ShiftCategory::Late)]
#[case(ShiftCategory::Night)]
fn explicit_shift_overrides_sunday(#[case] category: ShiftCategory) {
    let staff_id = Uuid::new_v4();
    // 2025-06-01 is a Sunday.
    let sunday = date(2025, 6, 1);

    let shifts = vec![Shift::new(staff_id, sunday, category)];
    let rules = ScheduleRules::default();

    assert_eq!(
        effective_category(staff_id, sunday, &shifts, &[], &rules),
        category
    );
}

#[test]
fn off_request_resolves_to_off() {
    let staff_id = Uuid::new_v4();
    let day = date(2025, 6, 4);

    let requests = vec![ShiftRequest::day_off(staff_id, day)];
    let rules = ScheduleRules::default();

    assert_eq!(
        effective_category(staff_id, day, &[], &requests, &rules),
        ShiftCategory::Off
    );
}

#[test]
fn bare_weekday_defaults_to_day() {
    let staff_id = Uuid::new_v4();
    let wednesday = date(2025, 6, 4);
    let rules = ScheduleRules::default();

    assert_eq!(
        effective_category(staff_id, wednesday, &[], &[], &rules),
        ShiftCategory::Day
    );
}

#[test]
fn bare_sunday_defaults_to_off() {
    let staff_id = Uuid::new_v4();
    let sunday = date(2025, 6, 1);
    let rules = ScheduleRules::default();

    assert_eq!(
        effective_category(staff_id, sunday, &[], &[], &rules),
        ShiftCategory::Off
    );
}

#[test]
fn closure_day_is_configurable() {
    let staff_id = Uuid::new_v4();
    let sunday = date(2025, 6, 1);
    // 2025-06-02 is a Monday.
    let monday = date(2025, 6, 2);

    let rules = ScheduleRules {
        closed_weekday: Weekday::Mon,
        ..ScheduleRules::default()
    };

    assert_eq!(
        effective_category(staff_id, monday, &[], &[], &rules),
        ShiftCategory::Off
    );
    assert_eq!(
        effective_category(staff_id, sunday, &[], &[], &rules),
        ShiftCategory::Day
    );
}

#[test]
fn signals_for_other_staff_or_dates_do_not_leak() {
    let staff_id = Uuid::new_v4();
    let other_staff = Uuid::new_v4();
    let day = date(2025, 6, 4);
    let other_day = date(2025, 6, 5);

    let shifts = vec![Shift::new(other_staff, day, ShiftCategory::Night)];
    let requests = vec![ShiftRequest::day_off(staff_id, other_day)];
    let rules = ScheduleRules::default();

    assert_eq!(
        effective_category(staff_id, day, &shifts, &requests, &rules),
        ShiftCategory::Day
    );
}

#[test]
fn resolution_is_idempotent() {
    let staff_id = Uuid::new_v4();
    let day = date(2025, 6, 7);

    let shifts = vec![Shift::new(staff_id, day, ShiftCategory::Late)];
    let requests = vec![ShiftRequest::day_off(staff_id, day)];
    let rules = ScheduleRules::default();

    let first = effective_category(staff_id, day, &shifts, &requests, &rules);
    let second = effective_category(staff_id, day, &shifts, &requests, &rules);
    assert_eq!(first, second);
}

#[test]
fn lookup_agrees_with_linear_scan_across_a_month() {
    let staff: Vec<Uuid> = (0..4).map(|_| Uuid::new_v4()).collect();
    let rules = ScheduleRules::default();

    let shifts = vec![
        Shift::new(staff[0], date(2025, 6, 2), ShiftCategory::Early),
        Shift::new(staff[1], date(2025, 6, 1), ShiftCategory::Night),
        Shift::new(staff[2], date(2025, 6, 15), ShiftCategory::Off),
    ];
    let requests = vec![
        ShiftRequest::day_off(staff[0], date(2025, 6, 10)),
        ShiftRequest::day_off(staff[3], date(2025, 6, 2)),
    ];

    let lookup = ShiftLookup::new(&shifts, &requests);
    for staff_id in &staff {
        for day in 1..=30 {
            let d = date(2025, 6, day);
            assert_eq!(
                lookup.effective_category(*staff_id, d, &rules),
                effective_category(*staff_id, d, &shifts, &requests, &rules),
                "divergence for staff {staff_id} on {d}"
            );
        }
    }
}

#[test]
fn duplicate_shift_records_resolve_to_the_first() {
    let staff_id = Uuid::new_v4();
    let day = date(2025, 6, 4);

    let shifts = vec![
        Shift::new(staff_id, day, ShiftCategory::Early),
        Shift::new(staff_id, day, ShiftCategory::Late),
    ];
    let rules = ScheduleRules::default();

    let lookup = ShiftLookup::new(&shifts, &[]);
    assert_eq!(
        lookup.effective_category(staff_id, day, &rules),
        ShiftCategory::Early
    );
    assert_eq!(
        effective_category(staff_id, day, &shifts, &[], &rules),
        ShiftCategory::Early
    );
}
