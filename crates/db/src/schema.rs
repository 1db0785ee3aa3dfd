use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

/// Creates the schedule tables. `owner_id` partitions every table by the
/// owning tenant; shifts and shift_requests carry the one-per-(staff,
/// date) uniqueness the resolver depends on. staff_id and task_type_id
/// columns are deliberately not foreign keys — deleting a staff member
/// or task type leaves historical rows in place.
pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create staff table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS staff (
            id UUID PRIMARY KEY,
            owner_id UUID NOT NULL,
            name VARCHAR(255) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create task_types table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS task_types (
            id UUID PRIMARY KEY,
            owner_id UUID NOT NULL,
            name VARCHAR(255) NOT NULL,
            color VARCHAR(32) NOT NULL,
            text_color VARCHAR(32) NULL,
            duration_minutes INTEGER NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT positive_duration CHECK (duration_minutes > 0)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create shifts table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS shifts (
            id UUID PRIMARY KEY,
            owner_id UUID NOT NULL,
            staff_id UUID NOT NULL,
            date DATE NOT NULL,
            shift_type VARCHAR(16) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT one_shift_per_staff_day UNIQUE (owner_id, staff_id, date)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create shift_requests table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS shift_requests (
            id UUID PRIMARY KEY,
            owner_id UUID NOT NULL,
            staff_id UUID NOT NULL,
            date DATE NOT NULL,
            request_type VARCHAR(16) NOT NULL DEFAULT 'Off',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT one_request_per_staff_day UNIQUE (owner_id, staff_id, date)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create task_assignments table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS task_assignments (
            id UUID PRIMARY KEY,
            owner_id UUID NOT NULL,
            staff_id UUID NOT NULL,
            date DATE NOT NULL,
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            task_type_id UUID NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_time_range CHECK (end_time > start_time)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes, one statement per call
    let indexes = [
        "CREATE INDEX IF NOT EXISTS idx_staff_owner_id ON staff(owner_id)",
        "CREATE INDEX IF NOT EXISTS idx_task_types_owner_id ON task_types(owner_id)",
        "CREATE INDEX IF NOT EXISTS idx_shifts_owner_date ON shifts(owner_id, date)",
        "CREATE INDEX IF NOT EXISTS idx_shift_requests_owner_date ON shift_requests(owner_id, date)",
        "CREATE INDEX IF NOT EXISTS idx_task_assignments_owner_date ON task_assignments(owner_id, date)",
        "CREATE INDEX IF NOT EXISTS idx_task_assignments_staff_id ON task_assignments(staff_id)",
    ];
    for statement in indexes {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
