use crate::core::students::ensure_student;
use crate::db::entry_logs;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::{EntryLog, EntryStatus};
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::colorize_in_out;
use crate::utils::date;
use crate::utils::formatting::{datetime_or_dash, mins2readable};
use crate::utils::table::Table;
use chrono::NaiveDateTime;

pub fn logs_table(logs: &[EntryLog]) -> Table {
    let mut table = Table::new(vec![
        "Log ID",
        "Student ID",
        "Entry",
        "Exit",
        "Stay",
        "Status",
    ]);
    for log in logs {
        table.add_row(vec![
            log.id.to_string(),
            log.student_id.to_string(),
            colorize_in_out(&datetime_or_dash(log.entry_time.as_ref()), true),
            colorize_in_out(&datetime_or_dash(log.exit_time.as_ref()), false),
            log.duration_minutes()
                .map(mins2readable)
                .unwrap_or_else(|| "--".to_string()),
            log.status.clone(),
        ]);
    }
    table
}

/// Check-in / check-out on top of the entry log table.
pub struct EntryLogic;

impl EntryLogic {
    /// Open a stay for `student_id` at `at` (default: now).
    ///
    /// A student who is already inside keeps the open stay; its id is
    /// returned and nothing is written.
    pub fn check_in(
        pool: &mut DbPool,
        student_id: i64,
        at: Option<NaiveDateTime>,
    ) -> AppResult<i64> {
        let student = ensure_student(&pool.conn, student_id)?;

        if let Some(open) = entry_logs::find_open_entry(&pool.conn, student_id)? {
            warning(format!(
                "{} is already checked in since {}.",
                student.label(),
                datetime_or_dash(open.entry_time.as_ref())
            ));
            return Ok(open.id);
        }

        let at = at.unwrap_or_else(date::now);
        let id = entry_logs::add_entry(
            &pool.conn,
            student_id,
            Some(at),
            None,
            Some(EntryStatus::CHECKED_IN),
        )?;
        success(format!(
            "Entry recorded for {} at {}.",
            student.label(),
            date::format_datetime(&at)
        ));
        Ok(id)
    }

    /// Close the most recent open stay of `student_id` at `at` (default: now).
    ///
    /// With no open stay on record an exit-only row is written instead.
    pub fn check_out(
        pool: &mut DbPool,
        student_id: i64,
        at: Option<NaiveDateTime>,
    ) -> AppResult<i64> {
        let student = ensure_student(&pool.conn, student_id)?;
        let at = at.unwrap_or_else(date::now);

        if let Some(open) = entry_logs::find_open_entry(&pool.conn, student_id)? {
            if entry_logs::close_entry(&pool.conn, open.id, &at, EntryStatus::CHECKED_OUT)? {
                success(format!(
                    "Exit recorded for {} at {}.",
                    student.label(),
                    date::format_datetime(&at)
                ));
                return Ok(open.id);
            }
            // closed by another writer since the lookup
            warning(format!(
                "Stay {} of {} is already closed; recording the exit on its own.",
                open.id,
                student.label()
            ));
        } else {
            warning(format!(
                "{} has no open check-in; recording the exit on its own.",
                student.label()
            ));
        }

        entry_logs::add_exit_only(&pool.conn, student_id, at, EntryStatus::CHECKED_OUT)
    }

    /// Raw insert with explicit times and status label.
    pub fn add(
        pool: &mut DbPool,
        student_id: i64,
        entry_time: Option<NaiveDateTime>,
        exit_time: Option<NaiveDateTime>,
        status: &str,
    ) -> AppResult<i64> {
        ensure_student(&pool.conn, student_id)?;
        let id = entry_logs::add_entry(&pool.conn, student_id, entry_time, exit_time, Some(status))?;
        success(format!("Entry log {} recorded.", id));
        Ok(id)
    }

    pub fn list(pool: &mut DbPool, student_id: Option<i64>, open_only: bool) -> AppResult<()> {
        let mut logs = match student_id {
            Some(id) => entry_logs::list_logs_for_student(&pool.conn, id)?,
            None => entry_logs::list_logs(&pool.conn)?,
        };
        if open_only {
            logs.retain(EntryLog::is_open);
        }

        if logs.is_empty() {
            info("No entry logs found.");
            return Ok(());
        }

        print!("{}", logs_table(&logs).render());
        Ok(())
    }
}
