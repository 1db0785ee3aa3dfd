use pretty_assertions::assert_eq;

use shiftboard_api::handlers::board::board_on;
use shiftboard_api::handlers::assignments::{place_on, PlaceAssignmentRequest};
use shiftboard_api::handlers::schedule::{create_request_on, CreateRequestPayload};
use shiftboard_core::models::shift::ShiftCategory;
use shiftboard_core::rules::ScheduleRules;

use crate::test_utils::{date, time, TestContext};

#[tokio::test]
async fn board_lists_working_staff_with_their_blocks() {
    let ctx = TestContext::seeded(3).await;
    let rules = ScheduleRules::default();
    let day = date(2025, 6, 4);

    // One member asks the day off; one gets a task block.
    create_request_on(
        ctx.repo.as_ref(),
        CreateRequestPayload {
            staff_id: ctx.staff_id(2),
            date: day,
        },
    )
    .await
    .expect("request");

    let placed = place_on(
        ctx.repo.as_ref(),
        PlaceAssignmentRequest {
            staff_id: ctx.staff_id(0),
            date: day,
            start_time: time(9, 0),
            task_type_id: ctx.bathing.id,
        },
    )
    .await
    .expect("placement");

    let board = board_on(ctx.repo.as_ref(), &rules, day)
        .await
        .expect("board");

    // The Off member is not a row; the other two are.
    assert_eq!(board.rows.len(), 2);
    assert!(board.rows.iter().all(|r| r.shift_type != ShiftCategory::Off));

    let first_row = board
        .rows
        .iter()
        .find(|r| r.staff.id == ctx.staff_id(0))
        .expect("working member row");
    assert_eq!(first_row.assignments.len(), 1);
    assert_eq!(first_row.assignments[0].id, placed.id);

    // 07:00-20:00 in 30-minute slots, plus the fixed catalog.
    assert_eq!(board.slots.len(), 26);
    assert_eq!(board.slots.first().map(String::as_str), Some("07:00"));
    assert_eq!(board.slots.last().map(String::as_str), Some("19:30"));
    assert_eq!(board.shift_types.len(), 5);
}

#[tokio::test]
async fn board_is_empty_on_a_closure_day_without_records() {
    let ctx = TestContext::seeded(3).await;
    let rules = ScheduleRules::default();
    // 2025-06-01 is a Sunday.
    let sunday = date(2025, 6, 1);

    let board = board_on(ctx.repo.as_ref(), &rules, sunday)
        .await
        .expect("board");
    assert!(board.rows.is_empty());
}
