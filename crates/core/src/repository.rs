//! Persistence contract for schedule data.
//!
//! Every backend — PostgreSQL, the in-memory reference store, test
//! doubles — implements [`ScheduleRepository`]; the rest of the system
//! only ever sees the trait. An implementation is scoped to one tenant:
//! multi-tenant backends partition rows by owner before this interface
//! is reached.
//!
//! Inserts are keyed by caller-generated unique ids and are safe to
//! retry; updating or deleting a missing id surfaces
//! [`ShiftError::NotFound`] rather than crashing.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::errors::{ShiftError, ShiftResult};
use crate::models::assignment::TaskAssignment;
use crate::models::request::ShiftRequest;
use crate::models::shift::Shift;
use crate::models::staff::Staff;
use crate::models::task_type::TaskType;

#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    async fn list_staff(&self) -> ShiftResult<Vec<Staff>>;
    async fn insert_staff(&self, staff: &Staff) -> ShiftResult<()>;
    async fn update_staff(&self, staff: &Staff) -> ShiftResult<()>;
    async fn delete_staff(&self, id: Uuid) -> ShiftResult<()>;

    async fn list_task_types(&self) -> ShiftResult<Vec<TaskType>>;
    async fn insert_task_type(&self, task_type: &TaskType) -> ShiftResult<()>;
    async fn update_task_type(&self, task_type: &TaskType) -> ShiftResult<()>;
    async fn delete_task_type(&self, id: Uuid) -> ShiftResult<()>;

    async fn list_shifts(&self) -> ShiftResult<Vec<Shift>>;
    async fn shifts_by_date(&self, date: NaiveDate) -> ShiftResult<Vec<Shift>>;
    /// Inserts or replaces the shift for the record's (staff, date) pair;
    /// at most one shift ever exists per pair. Returns the stored record
    /// — an existing row keeps its id, only the category changes.
    async fn upsert_shift(&self, shift: &Shift) -> ShiftResult<Shift>;

    async fn list_requests(&self) -> ShiftResult<Vec<ShiftRequest>>;
    /// Rejects a second request for the same (staff, date) with
    /// [`ShiftError::Conflict`].
    async fn insert_request(&self, request: &ShiftRequest) -> ShiftResult<()>;
    async fn delete_request(&self, id: Uuid) -> ShiftResult<()>;

    async fn list_assignments(&self) -> ShiftResult<Vec<TaskAssignment>>;
    async fn assignments_by_date(&self, date: NaiveDate) -> ShiftResult<Vec<TaskAssignment>>;
    async fn insert_assignment(&self, assignment: &TaskAssignment) -> ShiftResult<()>;
    async fn bulk_insert_assignments(&self, assignments: &[TaskAssignment]) -> ShiftResult<()>;
    async fn delete_assignment(&self, id: Uuid) -> ShiftResult<()>;
    /// Removes all assignments on the date, returning how many went.
    async fn delete_assignments_by_date(&self, date: NaiveDate) -> ShiftResult<usize>;
}

/// The in-memory reference backend: whole collections behind one lock,
/// mutated by filter/replace the way the browser-storage original did.
/// Used by tests and as the no-database deployment mode.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    state: RwLock<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    staff: Vec<Staff>,
    task_types: Vec<TaskType>,
    shifts: Vec<Shift>,
    requests: Vec<ShiftRequest>,
    assignments: Vec<TaskAssignment>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, MemoryState> {
        self.state.read().expect("memory repository lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, MemoryState> {
        self.state.write().expect("memory repository lock poisoned")
    }
}

#[async_trait]
impl ScheduleRepository for MemoryRepository {
    async fn list_staff(&self) -> ShiftResult<Vec<Staff>> {
        Ok(self.read().staff.clone())
    }

    async fn insert_staff(&self, staff: &Staff) -> ShiftResult<()> {
        let mut state = self.write();
        // Retried insert of the same id replaces rather than duplicates.
        if let Some(existing) = state.staff.iter_mut().find(|s| s.id == staff.id) {
            *existing = staff.clone();
        } else {
            state.staff.push(staff.clone());
        }
        Ok(())
    }

    async fn update_staff(&self, staff: &Staff) -> ShiftResult<()> {
        let mut state = self.write();
        match state.staff.iter_mut().find(|s| s.id == staff.id) {
            Some(existing) => {
                *existing = staff.clone();
                Ok(())
            }
            None => Err(ShiftError::NotFound(format!(
                "Staff with ID {} not found",
                staff.id
            ))),
        }
    }

    async fn delete_staff(&self, id: Uuid) -> ShiftResult<()> {
        let mut state = self.write();
        let before = state.staff.len();
        state.staff.retain(|s| s.id != id);
        if state.staff.len() == before {
            return Err(ShiftError::NotFound(format!("Staff with ID {id} not found")));
        }
        Ok(())
    }

    async fn list_task_types(&self) -> ShiftResult<Vec<TaskType>> {
        Ok(self.read().task_types.clone())
    }

    async fn insert_task_type(&self, task_type: &TaskType) -> ShiftResult<()> {
        let mut state = self.write();
        if let Some(existing) = state.task_types.iter_mut().find(|t| t.id == task_type.id) {
            *existing = task_type.clone();
        } else {
            state.task_types.push(task_type.clone());
        }
        Ok(())
    }

    async fn update_task_type(&self, task_type: &TaskType) -> ShiftResult<()> {
        let mut state = self.write();
        match state.task_types.iter_mut().find(|t| t.id == task_type.id) {
            Some(existing) => {
                *existing = task_type.clone();
                Ok(())
            }
            None => Err(ShiftError::NotFound(format!(
                "Task type with ID {} not found",
                task_type.id
            ))),
        }
    }

    async fn delete_task_type(&self, id: Uuid) -> ShiftResult<()> {
        let mut state = self.write();
        let before = state.task_types.len();
        state.task_types.retain(|t| t.id != id);
        if state.task_types.len() == before {
            return Err(ShiftError::NotFound(format!(
                "Task type with ID {id} not found"
            )));
        }
        Ok(())
    }

    async fn list_shifts(&self) -> ShiftResult<Vec<Shift>> {
        Ok(self.read().shifts.clone())
    }

    async fn shifts_by_date(&self, date: NaiveDate) -> ShiftResult<Vec<Shift>> {
        Ok(self
            .read()
            .shifts
            .iter()
            .filter(|s| s.date == date)
            .cloned()
            .collect())
    }

    async fn upsert_shift(&self, shift: &Shift) -> ShiftResult<Shift> {
        let mut state = self.write();
        match state
            .shifts
            .iter_mut()
            .find(|s| s.staff_id == shift.staff_id && s.date == shift.date)
        {
            Some(existing) => {
                existing.shift_type = shift.shift_type;
                Ok(existing.clone())
            }
            None => {
                state.shifts.push(shift.clone());
                Ok(shift.clone())
            }
        }
    }

    async fn list_requests(&self) -> ShiftResult<Vec<ShiftRequest>> {
        Ok(self.read().requests.clone())
    }

    async fn insert_request(&self, request: &ShiftRequest) -> ShiftResult<()> {
        let mut state = self.write();
        if state
            .requests
            .iter()
            .any(|r| r.staff_id == request.staff_id && r.date == request.date)
        {
            return Err(ShiftError::Conflict(format!(
                "A request already exists for staff {} on {}",
                request.staff_id, request.date
            )));
        }
        state.requests.push(request.clone());
        Ok(())
    }

    async fn delete_request(&self, id: Uuid) -> ShiftResult<()> {
        let mut state = self.write();
        let before = state.requests.len();
        state.requests.retain(|r| r.id != id);
        if state.requests.len() == before {
            return Err(ShiftError::NotFound(format!(
                "Request with ID {id} not found"
            )));
        }
        Ok(())
    }

    async fn list_assignments(&self) -> ShiftResult<Vec<TaskAssignment>> {
        Ok(self.read().assignments.clone())
    }

    async fn assignments_by_date(&self, date: NaiveDate) -> ShiftResult<Vec<TaskAssignment>> {
        Ok(self
            .read()
            .assignments
            .iter()
            .filter(|a| a.date == date)
            .cloned()
            .collect())
    }

    async fn insert_assignment(&self, assignment: &TaskAssignment) -> ShiftResult<()> {
        let mut state = self.write();
        if let Some(existing) = state.assignments.iter_mut().find(|a| a.id == assignment.id) {
            *existing = assignment.clone();
        } else {
            state.assignments.push(assignment.clone());
        }
        Ok(())
    }

    async fn bulk_insert_assignments(&self, assignments: &[TaskAssignment]) -> ShiftResult<()> {
        let mut state = self.write();
        state.assignments.extend_from_slice(assignments);
        Ok(())
    }

    async fn delete_assignment(&self, id: Uuid) -> ShiftResult<()> {
        let mut state = self.write();
        let before = state.assignments.len();
        state.assignments.retain(|a| a.id != id);
        if state.assignments.len() == before {
            return Err(ShiftError::NotFound(format!(
                "Assignment with ID {id} not found"
            )));
        }
        Ok(())
    }

    async fn delete_assignments_by_date(&self, date: NaiveDate) -> ShiftResult<usize> {
        let mut state = self.write();
        let before = state.assignments.len();
        state.assignments.retain(|a| a.date != date);
        Ok(before - state.assignments.len())
    }
}
