pub mod contacts;
pub mod error_reports;
pub mod students;
