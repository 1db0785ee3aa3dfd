use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;
use uuid::Uuid;

use shiftboard_core::errors::ShiftResult;
use shiftboard_core::models::assignment::TaskAssignment;
use shiftboard_core::models::request::ShiftRequest;
use shiftboard_core::models::shift::Shift;
use shiftboard_core::models::staff::Staff;
use shiftboard_core::models::task_type::TaskType;
use shiftboard_core::repository::ScheduleRepository;

// Mock repository for testing
mock! {
    pub ScheduleRepo {}

    #[async_trait]
    impl ScheduleRepository for ScheduleRepo {
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
        async fn upsert_shift(&self, shift: &Shift) -> ShiftResult<Shift>;

        async fn list_requests(&self) -> ShiftResult<Vec<ShiftRequest>>;
        async fn insert_request(&self, request: &ShiftRequest) -> ShiftResult<()>;
        async fn delete_request(&self, id: Uuid) -> ShiftResult<()>;

        async fn list_assignments(&self) -> ShiftResult<Vec<TaskAssignment>>;
        async fn assignments_by_date(&self, date: NaiveDate) -> ShiftResult<Vec<TaskAssignment>>;
        async fn insert_assignment(&self, assignment: &TaskAssignment) -> ShiftResult<()>;
        async fn bulk_insert_assignments(&self, assignments: &[TaskAssignment]) -> ShiftResult<()>;
        async fn delete_assignment(&self, id: Uuid) -> ShiftResult<()>;
        async fn delete_assignments_by_date(&self, date: NaiveDate) -> ShiftResult<usize>;
    }
}
