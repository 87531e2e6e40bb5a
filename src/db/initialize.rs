use crate::errors::AppResult;
use rusqlite::Connection;

/// Hostel schema. Every statement is create-if-absent, so running it on an
/// existing database neither duplicates tables nor touches their rows.
///
/// The `FOREIGN KEY` clauses document the relationships only: the
/// connection never turns on `PRAGMA foreign_keys`.
const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS students (
        id               INTEGER PRIMARY KEY AUTOINCREMENT,
        name             TEXT,
        dept             TEXT,
        year             INTEGER,
        contact          TEXT,
        guardian         TEXT,
        guardian_contact TEXT,
        room_no          TEXT
    );

    CREATE TABLE IF NOT EXISTS entry_logs (
        log_id     INTEGER PRIMARY KEY AUTOINCREMENT,
        student_id INTEGER,
        entry_time TEXT,
        exit_time  TEXT,
        status     TEXT,
        FOREIGN KEY (student_id) REFERENCES students(id)
    );

    CREATE TABLE IF NOT EXISTS medical_info (
        student_id        INTEGER PRIMARY KEY,
        blood_group       TEXT,
        allergies         TEXT,
        conditions        TEXT,
        emergency_contact TEXT,
        FOREIGN KEY (student_id) REFERENCES students(id)
    );

    CREATE TABLE IF NOT EXISTS leave_requests (
        request_id INTEGER PRIMARY KEY AUTOINCREMENT,
        student_id INTEGER,
        from_date  TEXT,
        to_date    TEXT,
        reason     TEXT,
        status     TEXT DEFAULT 'Pending',
        FOREIGN KEY (student_id) REFERENCES students(id)
    );
"#;

/// Names of the tables created by `init_db`, in dependency order.
pub const TABLES: [&str; 4] = ["students", "entry_logs", "medical_info", "leave_requests"];

/// Initialize the database.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}
