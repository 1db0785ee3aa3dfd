use pretty_assertions::assert_eq;

use shiftboard_api::handlers::schedule::{
    create_request_on, daily_summary_on, monthly_summary_on, upsert_shift_on,
    CreateRequestPayload, UpsertShiftRequest,
};
use shiftboard_core::errors::ShiftError;
use shiftboard_core::models::shift::ShiftCategory;
use shiftboard_core::repository::ScheduleRepository;
use shiftboard_core::rules::ScheduleRules;

use crate::test_utils::{date, TestContext};

#[tokio::test]
async fn upserting_twice_keeps_one_shift_per_staff_and_date() {
    let ctx = TestContext::seeded(1).await;
    let day = date(2025, 6, 4);

    upsert_shift_on(
        ctx.repo.as_ref(),
        UpsertShiftRequest {
            staff_id: ctx.staff_id(0),
            date: day,
            shift_type: ShiftCategory::Early,
        },
    )
    .await
    .expect("first decision");

    upsert_shift_on(
        ctx.repo.as_ref(),
        UpsertShiftRequest {
            staff_id: ctx.staff_id(0),
            date: day,
            shift_type: ShiftCategory::Night,
        },
    )
    .await
    .expect("overwrite");

    let shifts = ctx.repo.list_shifts().await.expect("list");
    assert_eq!(shifts.len(), 1);
    assert_eq!(shifts[0].shift_type, ShiftCategory::Night);
}

#[tokio::test]
async fn duplicate_day_off_requests_conflict() {
    let ctx = TestContext::seeded(1).await;
    let payload = CreateRequestPayload {
        staff_id: ctx.staff_id(0),
        date: date(2025, 6, 4),
    };

    create_request_on(ctx.repo.as_ref(), payload.clone())
        .await
        .expect("first request");

    let duplicate = create_request_on(ctx.repo.as_ref(), payload).await;
    assert!(matches!(duplicate, Err(ShiftError::Conflict(_))));

    assert_eq!(ctx.repo.list_requests().await.expect("list").len(), 1);
}

#[tokio::test]
async fn daily_summary_tallies_every_category() {
    let ctx = TestContext::seeded(5).await;
    let rules = ScheduleRules::default();
    // 2025-06-04 is a Wednesday.
    let day = date(2025, 6, 4);

    // One member explicitly Off; the other four default to Day.
    upsert_shift_on(
        ctx.repo.as_ref(),
        UpsertShiftRequest {
            staff_id: ctx.staff_id(0),
            date: day,
            shift_type: ShiftCategory::Off,
        },
    )
    .await
    .expect("explicit off");

    let summary = daily_summary_on(ctx.repo.as_ref(), &rules, day)
        .await
        .expect("summary");

    assert_eq!(summary.counts.get(&ShiftCategory::Day), Some(&4));
    assert_eq!(summary.counts.get(&ShiftCategory::Off), Some(&1));
    assert_eq!(summary.counts.get(&ShiftCategory::Early), Some(&0));
    assert_eq!(summary.counts.get(&ShiftCategory::Late), Some(&0));
    assert_eq!(summary.counts.get(&ShiftCategory::Night), Some(&0));

    // No early or late coverage: the staffing flag trips.
    assert!(!summary.valid);
}

#[tokio::test]
async fn daily_summary_validates_once_minimums_are_met() {
    let ctx = TestContext::seeded(4).await;
    let rules = ScheduleRules::default();
    let day = date(2025, 6, 4);

    let plan = [
        (0, ShiftCategory::Early),
        (1, ShiftCategory::Late),
        (2, ShiftCategory::Late),
    ];
    for (index, category) in plan {
        upsert_shift_on(
            ctx.repo.as_ref(),
            UpsertShiftRequest {
                staff_id: ctx.staff_id(index),
                date: day,
                shift_type: category,
            },
        )
        .await
        .expect("planned shift");
    }

    let summary = daily_summary_on(ctx.repo.as_ref(), &rules, day)
        .await
        .expect("summary");
    assert!(summary.valid);

    let total: usize = summary.counts.values().sum();
    assert_eq!(total, 4);
}

#[tokio::test]
async fn monthly_summary_counts_sum_to_the_month_length() {
    let ctx = TestContext::seeded(1).await;
    let rules = ScheduleRules::default();

    create_request_on(
        ctx.repo.as_ref(),
        CreateRequestPayload {
            staff_id: ctx.staff_id(0),
            date: date(2025, 6, 4),
        },
    )
    .await
    .expect("request");

    let summary = monthly_summary_on(ctx.repo.as_ref(), &rules, ctx.staff_id(0), 2025, 6)
        .await
        .expect("summary");

    let total: usize = summary.counts.values().sum();
    assert_eq!(total, 30);
    // Five June Sundays plus the requested day off.
    assert_eq!(summary.counts.get(&ShiftCategory::Off), Some(&6));
}

#[tokio::test]
async fn monthly_summary_rejects_invalid_months() {
    let ctx = TestContext::seeded(1).await;
    let rules = ScheduleRules::default();

    let result =
        monthly_summary_on(ctx.repo.as_ref(), &rules, ctx.staff_id(0), 2025, 13).await;
    assert!(matches!(result, Err(ShiftError::Validation(_))));
}
