//! Seed data for demos and fresh installations.

use crate::models::staff::Staff;
use crate::models::task_type::TaskType;

/// Numbered placeholder staff, e.g. for a demo tenant.
pub fn demo_staff(count: usize) -> Vec<Staff> {
    (1..=count).map(|i| Staff::new(format!("職員 {i}"))).collect()
}

/// The default care-facility task catalog: meal assistance, bathing,
/// toileting, recreation, vitals, rounds, records, and cleaning.
pub fn default_task_types() -> Vec<TaskType> {
    vec![
        TaskType::new("食事介助 (朝)", "#FFB74D", 60),
        TaskType::new("食事介助 (昼)", "#FFB74D", 60),
        TaskType::new("食事介助 (夕)", "#FFB74D", 60),
        TaskType::new("入浴介助", "#4FC3F7", 60),
        TaskType::new("排泄介助", "#81C784", 30),
        TaskType::new("レクリエーション", "#BA68C8", 60),
        TaskType::new("バイタルチェック", "#E57373", 60),
        TaskType::new("巡回", "#90A4AE", 30),
        TaskType::new("記録作成", "#7986CB", 60),
        TaskType::new("清掃・消毒", "#4DB6AC", 30),
    ]
}
