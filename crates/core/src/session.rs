//! The schedule working set for one user session.
//!
//! The original kept every collection in global shared state and spliced
//! it from many call sites; here all of it lives in one
//! [`ScheduleSession`] and every mutation goes through a narrow method
//! set. Mutations are optimistic: validate, apply in memory, issue the
//! persistence call — and revert the in-memory change if persistence
//! fails, so the session never drifts from the backend.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::aggregate;
use crate::assignment::{self, Clipboard};
use crate::errors::{ShiftError, ShiftResult};
use crate::models::assignment::TaskAssignment;
use crate::models::request::ShiftRequest;
use crate::models::shift::{Shift, ShiftCategory};
use crate::models::staff::Staff;
use crate::models::task_type::TaskType;
use crate::repository::ScheduleRepository;
use crate::resolver::ShiftLookup;
use crate::rules::ScheduleRules;

pub struct ScheduleSession {
    repo: Arc<dyn ScheduleRepository>,
    rules: ScheduleRules,
    staff: Vec<Staff>,
    task_types: Vec<TaskType>,
    shifts: Vec<Shift>,
    requests: Vec<ShiftRequest>,
    assignments: Vec<TaskAssignment>,
    clipboard: Clipboard,
}

impl ScheduleSession {
    /// Loads every collection from the backend into memory.
    pub async fn load(
        repo: Arc<dyn ScheduleRepository>,
        rules: ScheduleRules,
    ) -> ShiftResult<Self> {
        let staff = repo.list_staff().await?;
        let task_types = repo.list_task_types().await?;
        let shifts = repo.list_shifts().await?;
        let requests = repo.list_requests().await?;
        let assignments = repo.list_assignments().await?;

        Ok(Self {
            repo,
            rules,
            staff,
            task_types,
            shifts,
            requests,
            assignments,
            clipboard: Clipboard::new(),
        })
    }

    pub fn rules(&self) -> &ScheduleRules {
        &self.rules
    }

    pub fn staff(&self) -> &[Staff] {
        &self.staff
    }

    pub fn task_types(&self) -> &[TaskType] {
        &self.task_types
    }

    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    pub fn requests(&self) -> &[ShiftRequest] {
        &self.requests
    }

    pub fn assignments(&self) -> &[TaskAssignment] {
        &self.assignments
    }

    pub fn clipboard_len(&self) -> usize {
        self.clipboard.len()
    }

    // ---- staff administration ----

    pub async fn add_staff(&mut self, name: &str) -> ShiftResult<Staff> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ShiftError::Validation(
                "Staff name must not be blank".to_string(),
            ));
        }

        let staff = Staff::new(name);
        self.staff.push(staff.clone());
        if let Err(err) = self.repo.insert_staff(&staff).await {
            self.staff.pop();
            return Err(err);
        }
        Ok(staff)
    }

    pub async fn rename_staff(&mut self, id: Uuid, name: &str) -> ShiftResult<Staff> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ShiftError::Validation(
                "Staff name must not be blank".to_string(),
            ));
        }

        let index = self
            .staff
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| ShiftError::NotFound(format!("Staff with ID {id} not found")))?;

        let previous = self.staff[index].clone();
        self.staff[index].name = name.to_string();
        let updated = self.staff[index].clone();

        if let Err(err) = self.repo.update_staff(&updated).await {
            self.staff[index] = previous;
            return Err(err);
        }
        Ok(updated)
    }

    /// Removes the staff member. Historical shifts, requests, and
    /// assignments referencing them stay as they are.
    pub async fn delete_staff(&mut self, id: Uuid) -> ShiftResult<()> {
        let index = self
            .staff
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| ShiftError::NotFound(format!("Staff with ID {id} not found")))?;

        let removed = self.staff.remove(index);
        if let Err(err) = self.repo.delete_staff(id).await {
            self.staff.insert(index, removed);
            return Err(err);
        }
        Ok(())
    }

    // ---- task-type administration ----

    pub async fn add_task_type(
        &mut self,
        name: &str,
        color: &str,
        text_color: Option<String>,
        duration: u32,
    ) -> ShiftResult<TaskType> {
        self.validate_task_type(name, duration)?;

        let mut task_type = TaskType::new(name.trim(), color, duration);
        task_type.text_color = text_color;

        self.task_types.push(task_type.clone());
        if let Err(err) = self.repo.insert_task_type(&task_type).await {
            self.task_types.pop();
            return Err(err);
        }
        Ok(task_type)
    }

    pub async fn update_task_type(&mut self, task_type: TaskType) -> ShiftResult<TaskType> {
        self.validate_task_type(&task_type.name, task_type.duration)?;

        let index = self
            .task_types
            .iter()
            .position(|t| t.id == task_type.id)
            .ok_or_else(|| {
                ShiftError::NotFound(format!("Task type with ID {} not found", task_type.id))
            })?;

        let previous = std::mem::replace(&mut self.task_types[index], task_type.clone());
        if let Err(err) = self.repo.update_task_type(&task_type).await {
            self.task_types[index] = previous;
            return Err(err);
        }
        Ok(task_type)
    }

    pub async fn delete_task_type(&mut self, id: Uuid) -> ShiftResult<()> {
        let index = self
            .task_types
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| ShiftError::NotFound(format!("Task type with ID {id} not found")))?;

        let removed = self.task_types.remove(index);
        if let Err(err) = self.repo.delete_task_type(id).await {
            self.task_types.insert(index, removed);
            return Err(err);
        }
        Ok(())
    }

    fn validate_task_type(&self, name: &str, duration: u32) -> ShiftResult<()> {
        if name.trim().is_empty() {
            return Err(ShiftError::Validation(
                "Task name must not be blank".to_string(),
            ));
        }
        if !self.rules.duration_is_valid(duration) {
            return Err(ShiftError::Validation(format!(
                "Duration must be a positive multiple of {} minutes",
                self.rules.duration_step
            )));
        }
        Ok(())
    }

    // ---- shift planning ----

    /// Sets the shift category for (staff, date), replacing any earlier
    /// decision for that pair.
    pub async fn set_shift(
        &mut self,
        staff_id: Uuid,
        date: NaiveDate,
        category: ShiftCategory,
    ) -> ShiftResult<Shift> {
        let position = self
            .shifts
            .iter()
            .position(|s| s.staff_id == staff_id && s.date == date);

        // An existing decision for the pair keeps its id.
        let shift = match position {
            Some(index) => Shift {
                shift_type: category,
                ..self.shifts[index].clone()
            },
            None => Shift::new(staff_id, date, category),
        };
        let previous = match position {
            Some(index) => Some(std::mem::replace(&mut self.shifts[index], shift.clone())),
            None => {
                self.shifts.push(shift.clone());
                None
            }
        };

        if let Err(err) = self.repo.upsert_shift(&shift).await {
            match (position, previous) {
                (Some(index), Some(old)) => self.shifts[index] = old,
                _ => {
                    self.shifts.pop();
                }
            }
            return Err(err);
        }
        Ok(shift)
    }

    /// Adds a day-off request for (staff, date), or withdraws the
    /// existing one. Returns `true` when a request was added.
    pub async fn toggle_request(&mut self, staff_id: Uuid, date: NaiveDate) -> ShiftResult<bool> {
        match self
            .requests
            .iter()
            .position(|r| r.staff_id == staff_id && r.date == date)
        {
            Some(index) => {
                let removed = self.requests.remove(index);
                if let Err(err) = self.repo.delete_request(removed.id).await {
                    self.requests.insert(index, removed);
                    return Err(err);
                }
                Ok(false)
            }
            None => {
                let request = ShiftRequest::day_off(staff_id, date);
                self.requests.push(request.clone());
                if let Err(err) = self.repo.insert_request(&request).await {
                    self.requests.pop();
                    return Err(err);
                }
                Ok(true)
            }
        }
    }

    // ---- daily task board ----

    /// Places a task block starting at `start_time`. Rejects with
    /// [`ShiftError::Conflict`] when it would overlap an existing block
    /// of the same staff member that day; nothing is mutated on
    /// rejection.
    pub async fn place_assignment(
        &mut self,
        staff_id: Uuid,
        date: NaiveDate,
        start_time: NaiveTime,
        task_type_id: Uuid,
    ) -> ShiftResult<TaskAssignment> {
        let task_type = self
            .task_types
            .iter()
            .find(|t| t.id == task_type_id)
            .ok_or_else(|| {
                ShiftError::NotFound(format!("Task type with ID {task_type_id} not found"))
            })?;

        let candidate = assignment::build_assignment(staff_id, date, start_time, task_type)?;
        if let Some(existing) = assignment::find_conflict(&candidate, &self.assignments) {
            return Err(ShiftError::Conflict(format!(
                "Overlaps an existing task ({} - {})",
                crate::models::time::format_hhmm(existing.start_time),
                crate::models::time::format_hhmm(existing.end_time),
            )));
        }

        self.assignments.push(candidate.clone());
        if let Err(err) = self.repo.insert_assignment(&candidate).await {
            self.assignments.pop();
            return Err(err);
        }
        Ok(candidate)
    }

    /// Removes the block covering `time` for (staff, date), if any.
    /// Clicking an empty slot is a no-op and returns `None`.
    pub async fn remove_assignment_at(
        &mut self,
        staff_id: Uuid,
        date: NaiveDate,
        time: NaiveTime,
    ) -> ShiftResult<Option<TaskAssignment>> {
        let Some(found) = assignment::find_covering(&self.assignments, staff_id, date, time)
        else {
            return Ok(None);
        };
        let removed = found.clone();

        self.assignments.retain(|a| a.id != removed.id);
        if let Err(err) = self.repo.delete_assignment(removed.id).await {
            self.assignments.push(removed);
            return Err(err);
        }
        Ok(Some(removed))
    }

    /// Snapshots the date's assignments onto the clipboard, replacing
    /// whatever was held. Returns how many were copied.
    pub fn copy_day(&mut self, date: NaiveDate) -> usize {
        let day: Vec<TaskAssignment> = self
            .assignments
            .iter()
            .filter(|a| a.date == date)
            .cloned()
            .collect();
        let count = day.len();
        self.clipboard.copy(&day);
        count
    }

    /// Stamps the clipboard onto `target_date` with fresh ids. Empty
    /// clipboard pastes nothing; pasted blocks may land on top of
    /// existing ones.
    pub async fn paste_day(&mut self, target_date: NaiveDate) -> ShiftResult<Vec<TaskAssignment>> {
        let pasted = self.clipboard.paste(target_date);
        if pasted.is_empty() {
            return Ok(pasted);
        }

        let restore_len = self.assignments.len();
        self.assignments.extend(pasted.iter().cloned());
        if let Err(err) = self.repo.bulk_insert_assignments(&pasted).await {
            self.assignments.truncate(restore_len);
            return Err(err);
        }
        Ok(pasted)
    }

    /// Deletes all assignments on the date, for every staff member.
    pub async fn clear_day(&mut self, date: NaiveDate) -> ShiftResult<usize> {
        let removed: Vec<TaskAssignment> = self
            .assignments
            .iter()
            .filter(|a| a.date == date)
            .cloned()
            .collect();
        if removed.is_empty() {
            return Ok(0);
        }

        self.assignments.retain(|a| a.date != date);
        if let Err(err) = self.repo.delete_assignments_by_date(date).await {
            self.assignments.extend(removed);
            return Err(err);
        }
        Ok(removed.len())
    }

    // ---- read side ----

    pub fn effective_category(&self, staff_id: Uuid, date: NaiveDate) -> ShiftCategory {
        crate::resolver::effective_category(
            staff_id,
            date,
            &self.shifts,
            &self.requests,
            &self.rules,
        )
    }

    pub fn daily_counts(&self, date: NaiveDate) -> BTreeMap<ShiftCategory, usize> {
        let lookup = ShiftLookup::new(&self.shifts, &self.requests);
        aggregate::daily_counts(date, &self.staff, &lookup, &self.rules)
    }

    pub fn monthly_counts(
        &self,
        staff_id: Uuid,
        year: i32,
        month: u32,
    ) -> ShiftResult<BTreeMap<ShiftCategory, usize>> {
        let days = aggregate::days_in_month(year, month)?;
        let lookup = ShiftLookup::new(&self.shifts, &self.requests);
        Ok(aggregate::monthly_counts(staff_id, &days, &lookup, &self.rules))
    }

    /// Staff whose effective category for the date is anything but Off —
    /// the rows of the daily task board.
    pub fn working_staff_on(&self, date: NaiveDate) -> Vec<&Staff> {
        let lookup = ShiftLookup::new(&self.shifts, &self.requests);
        self.staff
            .iter()
            .filter(|s| lookup.effective_category(s.id, date, &self.rules) != ShiftCategory::Off)
            .collect()
    }

    pub fn assignments_on(&self, date: NaiveDate) -> Vec<&TaskAssignment> {
        self.assignments.iter().filter(|a| a.date == date).collect()
    }
}
