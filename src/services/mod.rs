pub mod step_service;
pub mod user_service;
