//! Access functions for the `leave_requests` table.

use crate::db::convert::{int, leave_status, opt_date, text};
use crate::errors::{AppError, AppResult};
use crate::models::{LeaveRequest, LeaveStatus};
use crate::utils::date::format_date;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Row, params};

const SELECT_LEAVES: &str =
    "SELECT request_id, student_id, from_date, to_date, reason, status FROM leave_requests";

pub fn map_leave(row: &Row) -> rusqlite::Result<LeaveRequest> {
    Ok(LeaveRequest {
        id: row.get("request_id")?,
        student_id: int(row, "student_id")?,
        from_date: opt_date(row, "from_date")?,
        to_date: opt_date(row, "to_date")?,
        reason: text(row, "reason")?,
        status: leave_status(row, "status")?,
    })
}

/// File a new request. The status column falls back to its `'Pending'`
/// default. Returns the generated request id.
pub fn add_leave_request(
    conn: &Connection,
    student_id: i64,
    from_date: &NaiveDate,
    to_date: &NaiveDate,
    reason: &str,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO leave_requests (student_id, from_date, to_date, reason)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            student_id,
            format_date(from_date),
            format_date(to_date),
            reason
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_leave_requests(conn: &Connection) -> AppResult<Vec<LeaveRequest>> {
    let mut stmt = conn.prepare(SELECT_LEAVES)?;
    let rows = stmt.query_map([], map_leave)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_leave_request(conn: &Connection, request_id: i64) -> AppResult<Option<LeaveRequest>> {
    let sql = format!("{SELECT_LEAVES} WHERE request_id = ?1");
    let req = conn.query_row(&sql, [request_id], map_leave).optional()?;
    Ok(req)
}

/// Move request `request_id` to `status`.
///
/// Returns `false` when the request does not exist. Only the known states
/// can be written (`InvalidStatus` otherwise). A move that
/// `LeaveStatus::can_transition_to` refuses fails with `InvalidTransition`
/// and leaves the row untouched; a row holding unknown status text can be
/// moved to any known state.
pub fn update_leave_status(
    conn: &Connection,
    request_id: i64,
    status: LeaveStatus,
) -> AppResult<bool> {
    if !status.is_known() {
        return Err(AppError::InvalidStatus(status.to_string()));
    }

    let Some(current) = get_leave_request(conn, request_id)? else {
        return Ok(false);
    };

    if !current.status.can_transition_to(&status) {
        return Err(AppError::InvalidTransition {
            from: current.status.to_string(),
            to: status.to_string(),
        });
    }

    let changed = conn.execute(
        "UPDATE leave_requests SET status = ?1 WHERE request_id = ?2",
        params![status.to_db_str(), request_id],
    )?;
    Ok(changed > 0)
}
