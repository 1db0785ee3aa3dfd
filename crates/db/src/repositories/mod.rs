pub mod assignments;
pub mod requests;
pub mod shifts;
pub mod staff;
pub mod task_types;
