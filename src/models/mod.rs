pub mod step_log;
pub mod user;
