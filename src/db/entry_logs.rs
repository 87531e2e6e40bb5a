//! Access functions for the `entry_logs` table.
//!
//! A row is a stay: it is opened by a check-in (entry set, exit NULL) and
//! closed in place by the matching check-out.

use crate::db::convert::{int, opt_datetime, text};
use crate::errors::AppResult;
use crate::models::{EntryLog, EntryStatus};
use crate::utils::date::{self, format_datetime};
use chrono::NaiveDateTime;
use rusqlite::{Connection, OptionalExtension, Row, params};

const SELECT_LOGS: &str = "SELECT log_id, student_id, entry_time, exit_time, status FROM entry_logs";

pub fn map_entry(row: &Row) -> rusqlite::Result<EntryLog> {
    Ok(EntryLog {
        id: row.get("log_id")?,
        student_id: int(row, "student_id")?,
        entry_time: opt_datetime(row, "entry_time")?,
        exit_time: opt_datetime(row, "exit_time")?,
        status: text(row, "status")?,
    })
}

fn insert_row(
    conn: &Connection,
    student_id: i64,
    entry_time: Option<&NaiveDateTime>,
    exit_time: Option<&NaiveDateTime>,
    status: &str,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO entry_logs (student_id, entry_time, exit_time, status)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            student_id,
            entry_time.map(format_datetime),
            exit_time.map(format_datetime),
            status,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Insert one log row.
///
/// `entry_time` defaults to now, `exit_time` to NULL and `status` to
/// "On Time". Returns the generated log id.
pub fn add_entry(
    conn: &Connection,
    student_id: i64,
    entry_time: Option<NaiveDateTime>,
    exit_time: Option<NaiveDateTime>,
    status: Option<&str>,
) -> AppResult<i64> {
    let entry = entry_time.unwrap_or_else(date::now);
    insert_row(
        conn,
        student_id,
        Some(&entry),
        exit_time.as_ref(),
        status.unwrap_or(EntryStatus::ON_TIME),
    )
}

/// Insert a row that only carries an exit time, for a check-out with no
/// matching check-in on record.
pub fn add_exit_only(
    conn: &Connection,
    student_id: i64,
    exit_time: NaiveDateTime,
    status: &str,
) -> AppResult<i64> {
    insert_row(conn, student_id, None, Some(&exit_time), status)
}

pub fn list_logs(conn: &Connection) -> AppResult<Vec<EntryLog>> {
    let mut stmt = conn.prepare(SELECT_LOGS)?;
    let rows = stmt.query_map([], map_entry)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn list_logs_for_student(conn: &Connection, student_id: i64) -> AppResult<Vec<EntryLog>> {
    let sql = format!("{SELECT_LOGS} WHERE student_id = ?1 ORDER BY log_id ASC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([student_id], map_entry)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Most recent stay of `student_id` that has an entry but no exit yet.
pub fn find_open_entry(conn: &Connection, student_id: i64) -> AppResult<Option<EntryLog>> {
    let sql = format!(
        "{SELECT_LOGS}
         WHERE student_id = ?1
           AND entry_time IS NOT NULL AND entry_time <> ''
           AND (exit_time IS NULL OR exit_time = '')
         ORDER BY entry_time DESC, log_id DESC
         LIMIT 1"
    );
    let open = conn.query_row(&sql, [student_id], map_entry).optional()?;
    Ok(open)
}

/// Set the exit time and status of an open stay.
///
/// Returns `false` when `log_id` does not exist or is already closed.
pub fn close_entry(
    conn: &Connection,
    log_id: i64,
    exit_time: &NaiveDateTime,
    status: &str,
) -> AppResult<bool> {
    let changed = conn.execute(
        "UPDATE entry_logs SET exit_time = ?1, status = ?2
         WHERE log_id = ?3 AND (exit_time IS NULL OR exit_time = '')",
        params![format_datetime(exit_time), status, log_id],
    )?;
    Ok(changed > 0)
}
