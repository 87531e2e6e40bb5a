pub mod entry_log;
pub mod leave_request;
pub mod leave_status;
pub mod medical;
pub mod student;

pub use entry_log::{EntryLog, EntryStatus};
pub use leave_request::LeaveRequest;
pub use leave_status::LeaveStatus;
pub use medical::MedicalInfo;
pub use student::{NewStudent, Student, StudentUpdate};
