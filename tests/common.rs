#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rhostel::db::initialize::init_db;
use rhostel::db::pool::DbPool;
use rhostel::models::NewStudent;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rhs() -> Command {
    cargo_bin_cmd!("rhostel")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rhostel.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rhostel_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh in-memory database with the hostel schema.
pub fn memory_pool() -> DbPool {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("init db");
    pool
}

pub fn student(name: &str, dept: &str, year: i32) -> NewStudent {
    NewStudent {
        name: name.to_string(),
        dept: dept.to_string(),
        year,
        contact: "9876543210".to_string(),
        guardian: format!("Guardian of {}", name),
        guardian_contact: "9123456789".to_string(),
        room_no: "A-101".to_string(),
    }
}

/// Count rows of `table` whose `column` equals `id`.
pub fn count_rows(pool: &DbPool, table: &str, column: &str, id: i64) -> i64 {
    pool.conn
        .query_row(
            &format!("SELECT COUNT(*) FROM {table} WHERE {column} = ?1"),
            [id],
            |row| row.get(0),
        )
        .expect("count rows")
}

/// Initialize DB via the CLI and add two students
pub fn init_db_with_data(db_path: &str) {
    rhs()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rhs()
        .args([
            "--db",
            db_path,
            "--test",
            "student",
            "add",
            "Aarav Sharma",
            "--dept",
            "CSE",
            "--year",
            "2",
            "--room",
            "A-101",
        ])
        .assert()
        .success();

    rhs()
        .args([
            "--db",
            db_path,
            "--test",
            "student",
            "add",
            "Priya Patel",
            "--dept",
            "ECE",
            "--year",
            "3",
            "--room",
            "B-202",
        ])
        .assert()
        .success();
}
