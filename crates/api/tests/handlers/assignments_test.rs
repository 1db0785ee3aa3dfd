use pretty_assertions::assert_eq;
use tokio::sync::RwLock;
use uuid::Uuid;

use shiftboard_api::handlers::assignments::{
    click_on, copy_on, paste_on, place_on, ClickRequest, PlaceAssignmentRequest,
};
use shiftboard_core::assignment::Clipboard;
use shiftboard_core::errors::ShiftError;
use shiftboard_core::repository::ScheduleRepository;

use crate::test_utils::{date, time, TestContext};

fn place_request(
    ctx: &TestContext,
    staff_index: usize,
    h: u32,
    m: u32,
) -> PlaceAssignmentRequest {
    PlaceAssignmentRequest {
        staff_id: ctx.staff_id(staff_index),
        date: date(2025, 6, 4),
        start_time: time(h, m),
        task_type_id: ctx.bathing.id,
    }
}

#[tokio::test]
async fn placement_computes_the_end_from_the_task_duration() {
    let ctx = TestContext::seeded(1).await;

    let placed = place_on(ctx.repo.as_ref(), place_request(&ctx, 0, 9, 0))
        .await
        .expect("free slot");

    assert_eq!(placed.start_time, time(9, 0));
    assert_eq!(placed.end_time, time(10, 0));
    assert_eq!(
        ctx.repo
            .assignments_by_date(date(2025, 6, 4))
            .await
            .expect("list")
            .len(),
        1
    );
}

#[tokio::test]
async fn placement_rejects_overlap_for_the_same_staff() {
    let ctx = TestContext::seeded(2).await;

    place_on(ctx.repo.as_ref(), place_request(&ctx, 0, 9, 0))
        .await
        .expect("first placement");

    // Same staff, overlapping start: rejected, nothing persisted.
    let clash = place_on(ctx.repo.as_ref(), place_request(&ctx, 0, 9, 30)).await;
    assert!(matches!(clash, Err(ShiftError::Conflict(_))));

    // Same interval for another staff member: accepted.
    place_on(ctx.repo.as_ref(), place_request(&ctx, 1, 9, 30))
        .await
        .expect("different staff");

    assert_eq!(
        ctx.repo
            .assignments_by_date(date(2025, 6, 4))
            .await
            .expect("list")
            .len(),
        2
    );
}

#[tokio::test]
async fn placement_rejects_unknown_task_types() {
    let ctx = TestContext::seeded(1).await;

    let mut request = place_request(&ctx, 0, 9, 0);
    request.task_type_id = Uuid::new_v4();

    let result = place_on(ctx.repo.as_ref(), request).await;
    assert!(matches!(result, Err(ShiftError::NotFound(_))));
}

#[tokio::test]
async fn clicking_toggles_the_covering_block_off() {
    let ctx = TestContext::seeded(1).await;

    let placed = place_on(ctx.repo.as_ref(), place_request(&ctx, 0, 9, 0))
        .await
        .expect("placement");

    let removed = click_on(
        ctx.repo.as_ref(),
        ClickRequest {
            staff_id: ctx.staff_id(0),
            date: date(2025, 6, 4),
            time: time(9, 30),
        },
    )
    .await
    .expect("click inside the block");
    assert_eq!(removed.map(|a| a.id), Some(placed.id));

    // The very same click again finds nothing to remove.
    let noop = click_on(
        ctx.repo.as_ref(),
        ClickRequest {
            staff_id: ctx.staff_id(0),
            date: date(2025, 6, 4),
            time: time(9, 30),
        },
    )
    .await
    .expect("click on an empty slot");
    assert!(noop.is_none());
}

#[tokio::test]
async fn copy_paste_rekeys_onto_the_target_date() {
    let ctx = TestContext::seeded(1).await;
    let clipboard = RwLock::new(Clipboard::new());
    let source = date(2025, 6, 4);
    let target = date(2025, 6, 11);

    let original = place_on(ctx.repo.as_ref(), place_request(&ctx, 0, 9, 0))
        .await
        .expect("source block");

    let copied = copy_on(ctx.repo.as_ref(), &clipboard, source)
        .await
        .expect("copy");
    assert_eq!(copied, 1);

    let pasted = paste_on(ctx.repo.as_ref(), &clipboard, target)
        .await
        .expect("paste");
    assert_eq!(pasted.len(), 1);
    assert_ne!(pasted[0].id, original.id);
    assert_eq!(pasted[0].date, target);
    assert_eq!(pasted[0].staff_id, original.staff_id);
    assert_eq!(pasted[0].start_time, original.start_time);
    assert_eq!(pasted[0].end_time, original.end_time);
    assert_eq!(pasted[0].task_type_id, original.task_type_id);

    // A second paste lands an independent set of ids on the same date.
    let again = paste_on(ctx.repo.as_ref(), &clipboard, target)
        .await
        .expect("second paste");
    assert_ne!(again[0].id, pasted[0].id);

    assert_eq!(
        ctx.repo.assignments_by_date(target).await.expect("list").len(),
        2
    );
}

#[tokio::test]
async fn pasting_an_empty_clipboard_inserts_nothing() {
    let ctx = TestContext::seeded(1).await;
    let clipboard = RwLock::new(Clipboard::new());

    let pasted = paste_on(ctx.repo.as_ref(), &clipboard, date(2025, 6, 11))
        .await
        .expect("paste");
    assert!(pasted.is_empty());
    assert!(ctx.repo.list_assignments().await.expect("list").is_empty());
}

#[tokio::test]
async fn clearing_a_date_spares_other_dates() {
    let ctx = TestContext::seeded(1).await;
    let day = date(2025, 6, 4);

    place_on(ctx.repo.as_ref(), place_request(&ctx, 0, 9, 0))
        .await
        .expect("block one");
    place_on(ctx.repo.as_ref(), place_request(&ctx, 0, 11, 0))
        .await
        .expect("block two");

    let mut other = place_request(&ctx, 0, 9, 0);
    other.date = date(2025, 6, 5);
    place_on(ctx.repo.as_ref(), other).await.expect("other day");

    let removed = ctx
        .repo
        .delete_assignments_by_date(day)
        .await
        .expect("clear");
    assert_eq!(removed, 2);

    let remaining = ctx.repo.list_assignments().await.expect("list");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].date, date(2025, 6, 5));
}
