use crate::models::DbTaskAssignment;
use chrono::{NaiveDate, NaiveTime};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn list_assignments(
    pool: &Pool<Postgres>,
    owner_id: Uuid,
) -> Result<Vec<DbTaskAssignment>> {
    tracing::debug!("Listing task assignments for owner {}", owner_id);

    let rows = sqlx::query_as::<_, DbTaskAssignment>(
        r#"
        SELECT id, owner_id, staff_id, date, start_time, end_time, task_type_id, created_at
        FROM task_assignments
        WHERE owner_id = $1
        ORDER BY date ASC, start_time ASC
        "#,
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn assignments_by_date(
    pool: &Pool<Postgres>,
    owner_id: Uuid,
    date: NaiveDate,
) -> Result<Vec<DbTaskAssignment>> {
    tracing::debug!("Listing task assignments for owner {} on {}", owner_id, date);

    let rows = sqlx::query_as::<_, DbTaskAssignment>(
        r#"
        SELECT id, owner_id, staff_id, date, start_time, end_time, task_type_id, created_at
        FROM task_assignments
        WHERE owner_id = $1 AND date = $2
        ORDER BY start_time ASC
        "#,
    )
    .bind(owner_id)
    .bind(date)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

#[allow(clippy::too_many_arguments)]
pub async fn insert_assignment(
    pool: &Pool<Postgres>,
    owner_id: Uuid,
    id: Uuid,
    staff_id: Uuid,
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    task_type_id: Uuid,
) -> Result<()> {
    tracing::debug!(
        "Inserting task assignment: staff_id={}, date={}, start={}",
        staff_id,
        date,
        start_time
    );

    // Retried insert of the same id is a no-op.
    sqlx::query(
        r#"
        INSERT INTO task_assignments
            (id, owner_id, staff_id, date, start_time, end_time, task_type_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        ON CONFLICT (id) DO NOTHING
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .bind(staff_id)
    .bind(date)
    .bind(start_time)
    .bind(end_time)
    .bind(task_type_id)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn bulk_insert_assignments(
    pool: &Pool<Postgres>,
    owner_id: Uuid,
    assignments: &[shiftboard_core::models::assignment::TaskAssignment],
) -> Result<()> {
    tracing::debug!(
        "Bulk inserting {} task assignments for owner {}",
        assignments.len(),
        owner_id
    );

    let mut tx = pool.begin().await?;
    for assignment in assignments {
        sqlx::query(
            r#"
            INSERT INTO task_assignments
                (id, owner_id, staff_id, date, start_time, end_time, task_type_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(assignment.id)
        .bind(owner_id)
        .bind(assignment.staff_id)
        .bind(assignment.date)
        .bind(assignment.start_time)
        .bind(assignment.end_time)
        .bind(assignment.task_type_id)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    Ok(())
}

pub async fn delete_assignment(pool: &Pool<Postgres>, owner_id: Uuid, id: Uuid) -> Result<bool> {
    tracing::debug!("Deleting task assignment: id={}", id);

    let result = sqlx::query(
        r#"
        DELETE FROM task_assignments
        WHERE id = $1 AND owner_id = $2
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete_assignments_by_date(
    pool: &Pool<Postgres>,
    owner_id: Uuid,
    date: NaiveDate,
) -> Result<u64> {
    tracing::debug!("Clearing task assignments for owner {} on {}", owner_id, date);

    let result = sqlx::query(
        r#"
        DELETE FROM task_assignments
        WHERE owner_id = $1 AND date = $2
        "#,
    )
    .bind(owner_id)
    .bind(date)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
