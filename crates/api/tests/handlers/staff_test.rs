use mockall::predicate;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use shiftboard_api::handlers::staff::{create_staff_on, update_staff_on};
use shiftboard_core::errors::ShiftError;
use shiftboard_core::repository::ScheduleRepository;
use shiftboard_db::mock::repositories::MockScheduleRepo;

use crate::test_utils::TestContext;

#[tokio::test]
async fn create_staff_rejects_blank_names() {
    let ctx = TestContext::seeded(0).await;

    let result = create_staff_on(ctx.repo.as_ref(), "   ").await;
    assert!(matches!(result, Err(ShiftError::Validation(_))));
    assert!(ctx.repo.list_staff().await.expect("list").is_empty());
}

#[tokio::test]
async fn create_staff_trims_and_persists() {
    let ctx = TestContext::seeded(0).await;

    let created = create_staff_on(ctx.repo.as_ref(), "  佐藤  ")
        .await
        .expect("valid name");
    assert_eq!(created.name, "佐藤");

    let listed = ctx.repo.list_staff().await.expect("list");
    assert_eq!(listed, vec![created]);
}

#[tokio::test]
async fn update_staff_renames_an_existing_member() {
    let ctx = TestContext::seeded(1).await;

    let updated = update_staff_on(ctx.repo.as_ref(), ctx.staff_id(0), "田中")
        .await
        .expect("existing member");
    assert_eq!(updated.name, "田中");

    let listed = ctx.repo.list_staff().await.expect("list");
    assert_eq!(listed[0].name, "田中");
}

#[tokio::test]
async fn update_staff_surfaces_not_found() {
    let ctx = TestContext::seeded(1).await;

    let result = update_staff_on(ctx.repo.as_ref(), Uuid::new_v4(), "佐藤").await;
    assert!(matches!(result, Err(ShiftError::NotFound(_))));
}

#[tokio::test]
async fn backend_failures_surface_as_database_errors() {
    let mut repo = MockScheduleRepo::new();
    repo.expect_insert_staff()
        .with(predicate::function(|s: &shiftboard_core::models::staff::Staff| {
            s.name == "佐藤"
        }))
        .returning(|_| Err(ShiftError::Database(eyre::eyre!("connection reset"))));

    let result = create_staff_on(&repo, "佐藤").await;
    assert!(matches!(result, Err(ShiftError::Database(_))));
}
