use super::leave_status::LeaveStatus;
use chrono::NaiveDate;
use serde::Serialize;

/// A row of the `leave_requests` table.
///
/// `to_date` may precede `from_date` and overlapping requests are allowed:
/// the dates are only parsed, never checked against each other. A stored
/// date that does not parse reads back as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaveRequest {
    pub id: i64,
    pub student_id: i64,
    pub from_date: Option<NaiveDate>, // ⇔ leave_requests.from_date (TEXT "YYYY-MM-DD")
    pub to_date: Option<NaiveDate>,   // ⇔ leave_requests.to_date
    pub reason: String,
    pub status: LeaveStatus, // ⇔ leave_requests.status ('Pending' | 'Approved' | 'Rejected')
}

impl LeaveRequest {
    /// Number of calendar days covered, counting both ends.
    /// Zero when the range is reversed, `None` when a date is unreadable.
    pub fn days(&self) -> Option<i64> {
        let (from, to) = (self.from_date?, self.to_date?);
        Some(((to - from).num_days() + 1).max(0))
    }
}
