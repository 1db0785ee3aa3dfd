//! PostgreSQL implementation of the core persistence contract.
//!
//! [`PgRepository`] carries the pool plus the owning tenant; every query
//! it issues is scoped to that tenant's rows. Raw sqlx errors surface as
//! [`ShiftError::Database`] at this boundary and nowhere else.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use shiftboard_core::errors::{ShiftError, ShiftResult};
use shiftboard_core::models::assignment::TaskAssignment;
use shiftboard_core::models::request::ShiftRequest;
use shiftboard_core::models::shift::Shift;
use shiftboard_core::models::staff::Staff;
use shiftboard_core::models::task_type::TaskType;
use shiftboard_core::repository::ScheduleRepository;

use crate::repositories;
use crate::DbPool;

#[derive(Debug, Clone)]
pub struct PgRepository {
    pool: DbPool,
    owner_id: Uuid,
}

impl PgRepository {
    pub fn new(pool: DbPool, owner_id: Uuid) -> Self {
        Self { pool, owner_id }
    }

    pub fn owner_id(&self) -> Uuid {
        self.owner_id
    }
}

#[async_trait]
impl ScheduleRepository for PgRepository {
    async fn list_staff(&self) -> ShiftResult<Vec<Staff>> {
        let rows = repositories::staff::list_staff(&self.pool, self.owner_id)
            .await
            .map_err(ShiftError::Database)?;
        Ok(rows.into_iter().map(Staff::from).collect())
    }

    async fn insert_staff(&self, staff: &Staff) -> ShiftResult<()> {
        repositories::staff::insert_staff(&self.pool, self.owner_id, staff.id, &staff.name)
            .await
            .map_err(ShiftError::Database)?;
        Ok(())
    }

    async fn update_staff(&self, staff: &Staff) -> ShiftResult<()> {
        let updated =
            repositories::staff::update_staff(&self.pool, self.owner_id, staff.id, &staff.name)
                .await
                .map_err(ShiftError::Database)?;
        match updated {
            Some(_) => Ok(()),
            None => Err(ShiftError::NotFound(format!(
                "Staff with ID {} not found",
                staff.id
            ))),
        }
    }

    async fn delete_staff(&self, id: Uuid) -> ShiftResult<()> {
        let deleted = repositories::staff::delete_staff(&self.pool, self.owner_id, id)
            .await
            .map_err(ShiftError::Database)?;
        if !deleted {
            return Err(ShiftError::NotFound(format!("Staff with ID {id} not found")));
        }
        Ok(())
    }

    async fn list_task_types(&self) -> ShiftResult<Vec<TaskType>> {
        let rows = repositories::task_types::list_task_types(&self.pool, self.owner_id)
            .await
            .map_err(ShiftError::Database)?;
        rows.into_iter()
            .map(|row| TaskType::try_from(row).map_err(ShiftError::Database))
            .collect()
    }

    async fn insert_task_type(&self, task_type: &TaskType) -> ShiftResult<()> {
        repositories::task_types::insert_task_type(
            &self.pool,
            self.owner_id,
            task_type.id,
            &task_type.name,
            &task_type.color,
            task_type.text_color.as_deref(),
            task_type.duration as i32,
        )
        .await
        .map_err(ShiftError::Database)?;
        Ok(())
    }

    async fn update_task_type(&self, task_type: &TaskType) -> ShiftResult<()> {
        let updated = repositories::task_types::update_task_type(
            &self.pool,
            self.owner_id,
            task_type.id,
            &task_type.name,
            &task_type.color,
            task_type.text_color.as_deref(),
            task_type.duration as i32,
        )
        .await
        .map_err(ShiftError::Database)?;
        match updated {
            Some(_) => Ok(()),
            None => Err(ShiftError::NotFound(format!(
                "Task type with ID {} not found",
                task_type.id
            ))),
        }
    }

    async fn delete_task_type(&self, id: Uuid) -> ShiftResult<()> {
        let deleted = repositories::task_types::delete_task_type(&self.pool, self.owner_id, id)
            .await
            .map_err(ShiftError::Database)?;
        if !deleted {
            return Err(ShiftError::NotFound(format!(
                "Task type with ID {id} not found"
            )));
        }
        Ok(())
    }

    async fn list_shifts(&self) -> ShiftResult<Vec<Shift>> {
        let rows = repositories::shifts::list_shifts(&self.pool, self.owner_id)
            .await
            .map_err(ShiftError::Database)?;
        rows.into_iter()
            .map(|row| Shift::try_from(row).map_err(ShiftError::Database))
            .collect()
    }

    async fn shifts_by_date(&self, date: NaiveDate) -> ShiftResult<Vec<Shift>> {
        let rows = repositories::shifts::shifts_by_date(&self.pool, self.owner_id, date)
            .await
            .map_err(ShiftError::Database)?;
        rows.into_iter()
            .map(|row| Shift::try_from(row).map_err(ShiftError::Database))
            .collect()
    }

    async fn upsert_shift(&self, shift: &Shift) -> ShiftResult<Shift> {
        let row = repositories::shifts::upsert_shift(
            &self.pool,
            self.owner_id,
            shift.id,
            shift.staff_id,
            shift.date,
            shift.shift_type.as_str(),
        )
        .await
        .map_err(ShiftError::Database)?;
        Shift::try_from(row).map_err(ShiftError::Database)
    }

    async fn list_requests(&self) -> ShiftResult<Vec<ShiftRequest>> {
        let rows = repositories::requests::list_requests(&self.pool, self.owner_id)
            .await
            .map_err(ShiftError::Database)?;
        rows.into_iter()
            .map(|row| ShiftRequest::try_from(row).map_err(ShiftError::Database))
            .collect()
    }

    async fn insert_request(&self, request: &ShiftRequest) -> ShiftResult<()> {
        let inserted = repositories::requests::insert_request(
            &self.pool,
            self.owner_id,
            request.id,
            request.staff_id,
            request.date,
            request.kind.as_str(),
        )
        .await
        .map_err(ShiftError::Database)?;
        match inserted {
            Some(_) => Ok(()),
            None => Err(ShiftError::Conflict(format!(
                "A request already exists for staff {} on {}",
                request.staff_id, request.date
            ))),
        }
    }

    async fn delete_request(&self, id: Uuid) -> ShiftResult<()> {
        let deleted = repositories::requests::delete_request(&self.pool, self.owner_id, id)
            .await
            .map_err(ShiftError::Database)?;
        if !deleted {
            return Err(ShiftError::NotFound(format!(
                "Request with ID {id} not found"
            )));
        }
        Ok(())
    }

    async fn list_assignments(&self) -> ShiftResult<Vec<TaskAssignment>> {
        let rows = repositories::assignments::list_assignments(&self.pool, self.owner_id)
            .await
            .map_err(ShiftError::Database)?;
        Ok(rows.into_iter().map(TaskAssignment::from).collect())
    }

    async fn assignments_by_date(&self, date: NaiveDate) -> ShiftResult<Vec<TaskAssignment>> {
        let rows =
            repositories::assignments::assignments_by_date(&self.pool, self.owner_id, date)
                .await
                .map_err(ShiftError::Database)?;
        Ok(rows.into_iter().map(TaskAssignment::from).collect())
    }

    async fn insert_assignment(&self, assignment: &TaskAssignment) -> ShiftResult<()> {
        repositories::assignments::insert_assignment(
            &self.pool,
            self.owner_id,
            assignment.id,
            assignment.staff_id,
            assignment.date,
            assignment.start_time,
            assignment.end_time,
            assignment.task_type_id,
        )
        .await
        .map_err(ShiftError::Database)?;
        Ok(())
    }

    async fn bulk_insert_assignments(&self, assignments: &[TaskAssignment]) -> ShiftResult<()> {
        repositories::assignments::bulk_insert_assignments(&self.pool, self.owner_id, assignments)
            .await
            .map_err(ShiftError::Database)?;
        Ok(())
    }

    async fn delete_assignment(&self, id: Uuid) -> ShiftResult<()> {
        let deleted = repositories::assignments::delete_assignment(&self.pool, self.owner_id, id)
            .await
            .map_err(ShiftError::Database)?;
        if !deleted {
            return Err(ShiftError::NotFound(format!(
                "Assignment with ID {id} not found"
            )));
        }
        Ok(())
    }

    async fn delete_assignments_by_date(&self, date: NaiveDate) -> ShiftResult<usize> {
        let removed =
            repositories::assignments::delete_assignments_by_date(&self.pool, self.owner_id, date)
                .await
                .map_err(ShiftError::Database)?;
        Ok(removed as usize)
    }
}
