use crate::db::pool::DbPool;
use crate::db::students;
use crate::errors::{AppError, AppResult};
use crate::models::{NewStudent, Student, StudentUpdate};
use crate::ui::messages::{confirm, info, success, warning};
use crate::utils::colors::colorize_optional;
use crate::utils::table::Table;
use rusqlite::Connection;

/// Look a student up, failing with `StudentNotFound` when absent.
/// Used before writing rows that reference a student.
pub fn ensure_student(conn: &Connection, id: i64) -> AppResult<Student> {
    students::get_student(conn, id)?.ok_or(AppError::StudentNotFound(id))
}

pub fn students_table(list: &[Student]) -> Table {
    let mut table = Table::new(vec![
        "ID",
        "Name",
        "Dept",
        "Year",
        "Contact",
        "Guardian",
        "Guardian Contact",
        "Room",
    ]);
    for s in list {
        table.add_row(vec![
            s.id.to_string(),
            s.name.clone(),
            colorize_optional(&s.dept),
            s.year.to_string(),
            colorize_optional(&s.contact),
            colorize_optional(&s.guardian),
            colorize_optional(&s.guardian_contact),
            colorize_optional(&s.room_no),
        ]);
    }
    table
}

pub struct StudentLogic;

impl StudentLogic {
    pub fn add(pool: &mut DbPool, student: &NewStudent) -> AppResult<i64> {
        let id = students::add_student(&pool.conn, student)?;
        success(format!("{} added successfully (ID {}).", student.name, id));
        Ok(id)
    }

    pub fn list(pool: &mut DbPool) -> AppResult<()> {
        let list = students::list_students(&pool.conn)?;
        if list.is_empty() {
            info("No student records found.");
            return Ok(());
        }

        print!("{}", students_table(&list).render());
        Ok(())
    }

    pub fn update(pool: &mut DbPool, id: i64, upd: &StudentUpdate) -> AppResult<bool> {
        if upd.is_empty() {
            warning("Nothing to update: pass at least one field.");
            return Ok(false);
        }

        let updated = students::update_student(&pool.conn, id, upd)?;
        if updated {
            success(format!("Student {} updated.", id));
        } else {
            warning(format!("No student with id {}; nothing changed.", id));
        }
        Ok(updated)
    }

    /// Remove a student and everything that references it.
    /// Without `assume_yes` the user is asked first.
    pub fn delete(pool: &mut DbPool, id: i64, assume_yes: bool) -> AppResult<bool> {
        let label = students::get_student(&pool.conn, id)?
            .map(|s| s.label())
            .unwrap_or_else(|| format!("student ID {}", id));

        if !assume_yes
            && !confirm(format!(
                "Delete {} with all entry logs, leave requests and medical info? This action is irreversible.",
                label
            ))
        {
            info("Operation cancelled.");
            return Ok(false);
        }

        let removed = pool.with_conn(|conn| students::delete_student(conn, id))?;
        if removed {
            success(format!("{} and dependent records deleted.", label));
        } else {
            warning(format!(
                "No student with id {}; dependent records cleared.",
                id
            ));
        }
        Ok(removed)
    }
}
