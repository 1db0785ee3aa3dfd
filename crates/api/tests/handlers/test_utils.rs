use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use shiftboard_core::models::staff::Staff;
use shiftboard_core::models::task_type::TaskType;
use shiftboard_core::repository::{MemoryRepository, ScheduleRepository};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

/// In-memory backend pre-seeded with a small roster and one task type,
/// standing in for the PostgreSQL repository behind the handlers.
pub struct TestContext {
    pub repo: Arc<MemoryRepository>,
    pub staff: Vec<Staff>,
    pub bathing: TaskType,
}

impl TestContext {
    pub async fn seeded(staff_count: usize) -> Self {
        let repo = Arc::new(MemoryRepository::new());

        let mut staff = Vec::with_capacity(staff_count);
        for i in 1..=staff_count {
            let member = Staff::new(format!("職員 {i}"));
            repo.insert_staff(&member).await.expect("seed staff");
            staff.push(member);
        }

        let bathing = TaskType::new("入浴介助", "#4FC3F7", 60);
        repo.insert_task_type(&bathing).await.expect("seed task type");

        Self { repo, staff, bathing }
    }

    pub fn staff_id(&self, index: usize) -> Uuid {
        self.staff[index].id
    }
}
