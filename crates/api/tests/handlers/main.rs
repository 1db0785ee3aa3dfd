mod test_utils;

mod assignments_test;
mod board_test;
mod config_test;
mod middleware_test;
mod schedule_test;
mod staff_test;
