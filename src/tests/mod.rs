mod common;
mod diagnostics_tests;
mod users_tests;
