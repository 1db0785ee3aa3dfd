use crate::models::DbTaskType;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn list_task_types(pool: &Pool<Postgres>, owner_id: Uuid) -> Result<Vec<DbTaskType>> {
    tracing::debug!("Listing task types for owner {}", owner_id);

    let rows = sqlx::query_as::<_, DbTaskType>(
        r#"
        SELECT id, owner_id, name, color, text_color, duration_minutes, created_at
        FROM task_types
        WHERE owner_id = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn insert_task_type(
    pool: &Pool<Postgres>,
    owner_id: Uuid,
    id: Uuid,
    name: &str,
    color: &str,
    text_color: Option<&str>,
    duration_minutes: i32,
) -> Result<DbTaskType> {
    tracing::debug!(
        "Inserting task type: id={}, name={}, duration={}",
        id,
        name,
        duration_minutes
    );

    let row = sqlx::query_as::<_, DbTaskType>(
        r#"
        INSERT INTO task_types (id, owner_id, name, color, text_color, duration_minutes)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (id) DO UPDATE
            SET name = EXCLUDED.name,
                color = EXCLUDED.color,
                text_color = EXCLUDED.text_color,
                duration_minutes = EXCLUDED.duration_minutes
        RETURNING id, owner_id, name, color, text_color, duration_minutes, created_at
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .bind(name)
    .bind(color)
    .bind(text_color)
    .bind(duration_minutes)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn update_task_type(
    pool: &Pool<Postgres>,
    owner_id: Uuid,
    id: Uuid,
    name: &str,
    color: &str,
    text_color: Option<&str>,
    duration_minutes: i32,
) -> Result<Option<DbTaskType>> {
    tracing::debug!("Updating task type: id={}, name={}", id, name);

    let row = sqlx::query_as::<_, DbTaskType>(
        r#"
        UPDATE task_types
        SET name = $3, color = $4, text_color = $5, duration_minutes = $6
        WHERE id = $1 AND owner_id = $2
        RETURNING id, owner_id, name, color, text_color, duration_minutes, created_at
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .bind(name)
    .bind(color)
    .bind(text_color)
    .bind(duration_minutes)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn delete_task_type(pool: &Pool<Postgres>, owner_id: Uuid, id: Uuid) -> Result<bool> {
    tracing::debug!("Deleting task type: id={}", id);

    let result = sqlx::query(
        r#"
        DELETE FROM task_types
        WHERE id = $1 AND owner_id = $2
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
