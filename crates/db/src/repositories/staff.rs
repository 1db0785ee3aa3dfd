use crate::models::DbStaff;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn list_staff(pool: &Pool<Postgres>, owner_id: Uuid) -> Result<Vec<DbStaff>> {
    tracing::debug!("Listing staff for owner {}", owner_id);

    let rows = sqlx::query_as::<_, DbStaff>(
        r#"
        SELECT id, owner_id, name, created_at
        FROM staff
        WHERE owner_id = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn insert_staff(
    pool: &Pool<Postgres>,
    owner_id: Uuid,
    id: Uuid,
    name: &str,
) -> Result<DbStaff> {
    tracing::debug!("Inserting staff: id={}, name={}", id, name);

    // Upsert keyed on the caller-generated id keeps retries idempotent.
    let row = sqlx::query_as::<_, DbStaff>(
        r#"
        INSERT INTO staff (id, owner_id, name)
        VALUES ($1, $2, $3)
        ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name
        RETURNING id, owner_id, name, created_at
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .bind(name)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn update_staff(
    pool: &Pool<Postgres>,
    owner_id: Uuid,
    id: Uuid,
    name: &str,
) -> Result<Option<DbStaff>> {
    tracing::debug!("Updating staff: id={}, name={}", id, name);

    let row = sqlx::query_as::<_, DbStaff>(
        r#"
        UPDATE staff
        SET name = $3
        WHERE id = $1 AND owner_id = $2
        RETURNING id, owner_id, name, created_at
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .bind(name)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn delete_staff(pool: &Pool<Postgres>, owner_id: Uuid, id: Uuid) -> Result<bool> {
    tracing::debug!("Deleting staff: id={}", id);

    let result = sqlx::query(
        r#"
        DELETE FROM staff
        WHERE id = $1 AND owner_id = $2
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
