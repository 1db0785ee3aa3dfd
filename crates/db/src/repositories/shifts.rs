use crate::models::DbShift;
use chrono::NaiveDate;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn list_shifts(pool: &Pool<Postgres>, owner_id: Uuid) -> Result<Vec<DbShift>> {
    tracing::debug!("Listing shifts for owner {}", owner_id);

    let rows = sqlx::query_as::<_, DbShift>(
        r#"
        SELECT id, owner_id, staff_id, date, shift_type, created_at
        FROM shifts
        WHERE owner_id = $1
        ORDER BY date ASC
        "#,
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn shifts_by_date(
    pool: &Pool<Postgres>,
    owner_id: Uuid,
    date: NaiveDate,
) -> Result<Vec<DbShift>> {
    tracing::debug!("Listing shifts for owner {} on {}", owner_id, date);

    let rows = sqlx::query_as::<_, DbShift>(
        r#"
        SELECT id, owner_id, staff_id, date, shift_type, created_at
        FROM shifts
        WHERE owner_id = $1 AND date = $2
        "#,
    )
    .bind(owner_id)
    .bind(date)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// One shift per (staff, date): an existing row for the pair is replaced
/// in place, keeping its original id.
pub async fn upsert_shift(
    pool: &Pool<Postgres>,
    owner_id: Uuid,
    id: Uuid,
    staff_id: Uuid,
    date: NaiveDate,
    shift_type: &str,
) -> Result<DbShift> {
    tracing::debug!(
        "Upserting shift: staff_id={}, date={}, shift_type={}",
        staff_id,
        date,
        shift_type
    );

    let row = sqlx::query_as::<_, DbShift>(
        r#"
        INSERT INTO shifts (id, owner_id, staff_id, date, shift_type)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (owner_id, staff_id, date) DO UPDATE SET shift_type = EXCLUDED.shift_type
        RETURNING id, owner_id, staff_id, date, shift_type, created_at
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .bind(staff_id)
    .bind(date)
    .bind(shift_type)
    .fetch_one(pool)
    .await?;

    Ok(row)
}
