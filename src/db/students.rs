//! Access functions for the `students` table.

use crate::db::convert::{int, text};
use crate::errors::AppResult;
use crate::models::{NewStudent, Student, StudentUpdate};
use rusqlite::{Connection, OptionalExtension, Row, ToSql, params, params_from_iter};

const SELECT_STUDENTS: &str = "SELECT id, name, dept, year, contact, guardian, guardian_contact, room_no
     FROM students";

pub fn map_student(row: &Row) -> rusqlite::Result<Student> {
    Ok(Student {
        id: row.get("id")?,
        name: text(row, "name")?,
        dept: text(row, "dept")?,
        year: i32::try_from(int(row, "year")?).unwrap_or_default(),
        contact: text(row, "contact")?,
        guardian: text(row, "guardian")?,
        guardian_contact: text(row, "guardian_contact")?,
        room_no: text(row, "room_no")?,
    })
}

/// Insert a student and return the generated id. Field contents (including
/// the year range) are stored as given.
pub fn add_student(conn: &Connection, s: &NewStudent) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO students (name, dept, year, contact, guardian, guardian_contact, room_no)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            s.name,
            s.dept,
            s.year,
            s.contact,
            s.guardian,
            s.guardian_contact,
            s.room_no,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Full-table scan in storage order.
pub fn list_students(conn: &Connection) -> AppResult<Vec<Student>> {
    let mut stmt = conn.prepare(SELECT_STUDENTS)?;
    let rows = stmt.query_map([], map_student)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_student(conn: &Connection, id: i64) -> AppResult<Option<Student>> {
    let sql = format!("{SELECT_STUDENTS} WHERE id = ?1");
    let student = conn.query_row(&sql, [id], map_student).optional()?;
    Ok(student)
}

pub fn student_exists(conn: &Connection, id: i64) -> AppResult<bool> {
    let mut stmt = conn.prepare_cached("SELECT 1 FROM students WHERE id = ?1")?;
    Ok(stmt.exists([id])?)
}

/// Write the provided fields of `upd` to student `id`.
///
/// Returns `false` without touching the database when the patch is empty or
/// no student has that id.
pub fn update_student(conn: &Connection, id: i64, upd: &StudentUpdate) -> AppResult<bool> {
    let mut columns: Vec<&str> = Vec::new();
    let mut values: Vec<&dyn ToSql> = Vec::new();

    if let Some(v) = &upd.name {
        columns.push("name");
        values.push(v);
    }
    if let Some(v) = &upd.dept {
        columns.push("dept");
        values.push(v);
    }
    if let Some(v) = &upd.year {
        columns.push("year");
        values.push(v);
    }
    if let Some(v) = &upd.contact {
        columns.push("contact");
        values.push(v);
    }
    if let Some(v) = &upd.guardian {
        columns.push("guardian");
        values.push(v);
    }
    if let Some(v) = &upd.guardian_contact {
        columns.push("guardian_contact");
        values.push(v);
    }
    if let Some(v) = &upd.room_no {
        columns.push("room_no");
        values.push(v);
    }

    if columns.is_empty() {
        return Ok(false);
    }

    let assignments = columns
        .iter()
        .map(|c| format!("{c} = ?"))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!("UPDATE students SET {assignments} WHERE id = ?");
    values.push(&id);

    let changed = conn.execute(&sql, params_from_iter(values))?;
    Ok(changed > 0)
}

/// Delete a student together with its entry logs, leave requests and
/// medical info.
///
/// All four statements run in one transaction: either the whole entity
/// graph goes or nothing does. Dependent rows are removed even when the
/// student row itself is already gone. Returns whether a student row was
/// deleted.
pub fn delete_student(conn: &mut Connection, id: i64) -> AppResult<bool> {
    let tx = conn.transaction()?;

    let removed = tx.execute("DELETE FROM students WHERE id = ?1", [id])?;
    tx.execute("DELETE FROM entry_logs WHERE student_id = ?1", [id])?;
    tx.execute("DELETE FROM leave_requests WHERE student_id = ?1", [id])?;
    tx.execute("DELETE FROM medical_info WHERE student_id = ?1", [id])?;

    tx.commit()?;
    Ok(removed > 0)
}
