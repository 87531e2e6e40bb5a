use chrono::NaiveDateTime;
use serde::Serialize;

/// Status labels written by the check-in / check-out commands.
/// The column itself is free text: `entry add --status` accepts anything.
pub struct EntryStatus;

impl EntryStatus {
    pub const ON_TIME: &'static str = "On Time";
    pub const CHECKED_IN: &'static str = "Checked-In";
    pub const CHECKED_OUT: &'static str = "Checked-Out";
}

/// A row of the `entry_logs` table: one stay of a student inside the hostel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryLog {
    pub id: i64,
    pub student_id: i64,
    pub entry_time: Option<NaiveDateTime>, // ⇔ entry_logs.entry_time (TEXT "YYYY-MM-DD HH:MM:SS")
    pub exit_time: Option<NaiveDateTime>,  // ⇔ entry_logs.exit_time (NULL while inside)
    pub status: String,
}

impl EntryLog {
    /// The student checked in and has not checked out yet.
    pub fn is_open(&self) -> bool {
        self.entry_time.is_some() && self.exit_time.is_none()
    }

    /// Minutes between entry and exit, when both are known.
    pub fn duration_minutes(&self) -> Option<i64> {
        match (self.entry_time, self.exit_time) {
            (Some(entry), Some(exit)) => Some((exit - entry).num_minutes()),
            _ => None,
        }
    }
}
