pub mod analytics;
pub mod backup;
pub mod config;
pub mod entry;
pub mod leave;
pub mod medical;
pub mod students;
