use crate::core::students::ensure_student;
use crate::db::leave_requests;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::{LeaveRequest, LeaveStatus};
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::paint_leave_status;
use crate::utils::formatting::{date_or_dash, truncate};
use crate::utils::table::Table;
use chrono::NaiveDate;

pub fn leaves_table(leaves: &[LeaveRequest]) -> Table {
    let mut table = Table::new(vec![
        "Req ID",
        "Student ID",
        "From",
        "To",
        "Days",
        "Reason",
        "Status",
    ]);
    for req in leaves {
        table.add_row(vec![
            req.id.to_string(),
            req.student_id.to_string(),
            date_or_dash(req.from_date.as_ref()),
            date_or_dash(req.to_date.as_ref()),
            req.days()
                .map(|d| d.to_string())
                .unwrap_or_else(|| "--".to_string()),
            truncate(&req.reason, 40),
            paint_leave_status(&req.status),
        ]);
    }
    table
}

pub struct LeaveLogic;

impl LeaveLogic {
    pub fn submit(
        pool: &mut DbPool,
        student_id: i64,
        from_date: NaiveDate,
        to_date: NaiveDate,
        reason: &str,
    ) -> AppResult<i64> {
        let student = ensure_student(&pool.conn, student_id)?;
        let id =
            leave_requests::add_leave_request(&pool.conn, student_id, &from_date, &to_date, reason)?;
        success(format!(
            "Leave request {} submitted for {} ({} → {}).",
            id,
            student.label(),
            from_date,
            to_date
        ));
        Ok(id)
    }

    pub fn list(pool: &mut DbPool, status: Option<LeaveStatus>) -> AppResult<()> {
        let mut leaves = leave_requests::list_leave_requests(&pool.conn)?;
        if let Some(wanted) = status {
            leaves.retain(|r| r.status == wanted);
        }

        if leaves.is_empty() {
            info("No leave requests found.");
            return Ok(());
        }

        print!("{}", leaves_table(&leaves).render());
        Ok(())
    }

    /// Review a request. An unknown id is reported and otherwise ignored.
    pub fn set_status(pool: &mut DbPool, request_id: i64, status: LeaveStatus) -> AppResult<bool> {
        let updated = leave_requests::update_leave_status(&pool.conn, request_id, status.clone())?;
        if updated {
            success(format!(
                "Leave request {} is now {}.",
                request_id,
                paint_leave_status(&status)
            ));
        } else {
            warning(format!(
                "No leave request with id {}; nothing changed.",
                request_id
            ));
        }
        Ok(updated)
    }
}
