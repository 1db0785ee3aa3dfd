pub mod assignments;
pub mod board;
pub mod health;
pub mod schedule;
pub mod staff;
pub mod task_types;
