mod convert;
pub mod entry_logs;
pub mod initialize;
pub mod leave_requests;
pub mod medical;
pub mod pool;
pub mod stats;
pub mod students;
