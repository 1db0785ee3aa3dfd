use crate::models::DbShiftRequest;
use chrono::NaiveDate;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn list_requests(pool: &Pool<Postgres>, owner_id: Uuid) -> Result<Vec<DbShiftRequest>> {
    tracing::debug!("Listing shift requests for owner {}", owner_id);

    let rows = sqlx::query_as::<_, DbShiftRequest>(
        r#"
        SELECT id, owner_id, staff_id, date, request_type, created_at
        FROM shift_requests
        WHERE owner_id = $1
        ORDER BY date ASC
        "#,
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Returns `None` when a request already exists for the (staff, date)
/// pair — the unique constraint keeps resolution deterministic.
pub async fn insert_request(
    pool: &Pool<Postgres>,
    owner_id: Uuid,
    id: Uuid,
    staff_id: Uuid,
    date: NaiveDate,
    request_type: &str,
) -> Result<Option<DbShiftRequest>> {
    tracing::debug!(
        "Inserting shift request: staff_id={}, date={}, type={}",
        staff_id,
        date,
        request_type
    );

    let row = sqlx::query_as::<_, DbShiftRequest>(
        r#"
        INSERT INTO shift_requests (id, owner_id, staff_id, date, request_type)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (owner_id, staff_id, date) DO NOTHING
        RETURNING id, owner_id, staff_id, date, request_type, created_at
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .bind(staff_id)
    .bind(date)
    .bind(request_type)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn delete_request(pool: &Pool<Postgres>, owner_id: Uuid, id: Uuid) -> Result<bool> {
    tracing::debug!("Deleting shift request: id={}", id);

    let result = sqlx::query(
        r#"
        DELETE FROM shift_requests
        WHERE id = $1 AND owner_id = $2
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
