use rhostel::db::initialize::init_db;
use rhostel::db::pool::DbPool;
use rhostel::db::{entry_logs, leave_requests, medical, students};
use rhostel::models::{MedicalInfo, StudentUpdate};
use chrono::NaiveDate;

mod common;
use common::{count_rows, memory_pool, student};

#[test]
fn test_add_student_then_list_returns_the_row() {
    let pool = memory_pool();

    let first = students::add_student(&pool.conn, &student("Aarav Sharma", "CSE", 2)).unwrap();
    let second = students::add_student(&pool.conn, &student("Priya Patel", "ECE", 3)).unwrap();
    assert_ne!(first, second);

    let list = students::list_students(&pool.conn).unwrap();
    assert_eq!(list.len(), 2);

    let priya = list.iter().find(|s| s.id == second).expect("new row listed");
    assert_eq!(priya.name, "Priya Patel");
    assert_eq!(priya.dept, "ECE");
    assert_eq!(priya.year, 3);
    assert_eq!(priya.contact, "9876543210");
    assert_eq!(priya.guardian, "Guardian of Priya Patel");
    assert_eq!(priya.guardian_contact, "9123456789");
    assert_eq!(priya.room_no, "A-101");
}

#[test]
fn test_list_students_on_empty_db() {
    let pool = memory_pool();
    assert!(students::list_students(&pool.conn).unwrap().is_empty());
}

#[test]
fn test_year_is_not_range_checked() {
    let pool = memory_pool();
    let id = students::add_student(&pool.conn, &student("Late Joiner", "ME", 9)).unwrap();
    let s = students::get_student(&pool.conn, id).unwrap().unwrap();
    assert_eq!(s.year, 9);
}

#[test]
fn test_init_db_twice_keeps_tables_and_rows() {
    let pool = memory_pool();
    students::add_student(&pool.conn, &student("Aarav Sharma", "CSE", 2)).unwrap();

    init_db(&pool.conn).unwrap();
    init_db(&pool.conn).unwrap();

    let tables: i64 = pool
        .conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'
             AND name IN ('students', 'entry_logs', 'medical_info', 'leave_requests')",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(tables, 4);
    assert_eq!(students::list_students(&pool.conn).unwrap().len(), 1);

    let indexes: i64 = pool
        .conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'index' AND sql IS NOT NULL",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(indexes, 0);
}

#[test]
fn test_rows_written_by_other_clients_still_list() {
    let pool = memory_pool();
    students::add_student(&pool.conn, &student("Aarav Sharma", "CSE", 2)).unwrap();
    pool.conn
        .execute(
            "INSERT INTO students (name, dept, year, contact) VALUES ('Neha Singh', NULL, 'second', 9876543210)",
            [],
        )
        .unwrap();

    let list = students::list_students(&pool.conn).unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[1].name, "Neha Singh");
    assert_eq!(list[1].dept, "");
    assert_eq!(list[1].year, 0);
    assert_eq!(list[1].contact, "9876543210");
}

#[test]
fn test_data_survives_reopening_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hostel.sqlite");
    let path = path.to_string_lossy().to_string();

    {
        let pool = DbPool::new(&path).unwrap();
        init_db(&pool.conn).unwrap();
        students::add_student(&pool.conn, &student("Isha Verma", "CSE", 4)).unwrap();
    }

    let pool = DbPool::new(&path).unwrap();
    init_db(&pool.conn).unwrap();
    let list = students::list_students(&pool.conn).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].name, "Isha Verma");
}

#[test]
fn test_update_only_touches_given_fields() {
    let pool = memory_pool();
    let id = students::add_student(&pool.conn, &student("Aarav Sharma", "CSE", 2)).unwrap();

    let upd = StudentUpdate {
        contact: Some("9998887777".to_string()),
        room_no: Some("A-201".to_string()),
        ..Default::default()
    };
    assert!(students::update_student(&pool.conn, id, &upd).unwrap());

    let s = students::get_student(&pool.conn, id).unwrap().unwrap();
    assert_eq!(s.contact, "9998887777");
    assert_eq!(s.room_no, "A-201");
    assert_eq!(s.name, "Aarav Sharma");
    assert_eq!(s.dept, "CSE");
    assert_eq!(s.year, 2);
}

#[test]
fn test_update_missing_student_is_a_noop() {
    let pool = memory_pool();

    let upd = StudentUpdate {
        name: Some("Ghost".to_string()),
        year: Some(3),
        ..Default::default()
    };
    let updated = students::update_student(&pool.conn, 42, &upd).unwrap();

    assert!(!updated);
    assert!(students::list_students(&pool.conn).unwrap().is_empty());
}

#[test]
fn test_empty_update_changes_nothing() {
    let pool = memory_pool();
    let id = students::add_student(&pool.conn, &student("Aarav Sharma", "CSE", 2)).unwrap();

    assert!(!students::update_student(&pool.conn, id, &StudentUpdate::default()).unwrap());
    assert_eq!(
        students::get_student(&pool.conn, id).unwrap().unwrap().name,
        "Aarav Sharma"
    );
}

#[test]
fn test_student_exists() {
    let pool = memory_pool();
    let id = students::add_student(&pool.conn, &student("Rohan Mehta", "ME", 1)).unwrap();

    assert!(students::student_exists(&pool.conn, id).unwrap());
    assert!(!students::student_exists(&pool.conn, id + 1).unwrap());
    assert!(students::get_student(&pool.conn, id + 1).unwrap().is_none());
}

fn populate_dependents(pool: &DbPool, id: i64) {
    entry_logs::add_entry(&pool.conn, id, None, None, None).unwrap();
    entry_logs::add_entry(&pool.conn, id, None, None, Some("Checked-In")).unwrap();
    medical::upsert_medical_info(
        &pool.conn,
        &MedicalInfo {
            student_id: id,
            blood_group: "B+".to_string(),
            allergies: "Peanuts".to_string(),
            conditions: "Asthma".to_string(),
            emergency_contact: "9876543210".to_string(),
        },
    )
    .unwrap();
    let d = NaiveDate::from_ymd_opt(2025, 11, 13).unwrap();
    leave_requests::add_leave_request(&pool.conn, id, &d, &d, "Diwali").unwrap();
}

#[test]
fn test_delete_removes_student_and_dependents() {
    let mut pool = memory_pool();
    let gone = students::add_student(&pool.conn, &student("Aarav Sharma", "CSE", 2)).unwrap();
    let kept = students::add_student(&pool.conn, &student("Priya Patel", "ECE", 3)).unwrap();
    populate_dependents(&pool, gone);
    populate_dependents(&pool, kept);

    let removed = students::delete_student(&mut pool.conn, gone).unwrap();
    assert!(removed);

    assert_eq!(count_rows(&pool, "students", "id", gone), 0);
    assert_eq!(count_rows(&pool, "entry_logs", "student_id", gone), 0);
    assert_eq!(count_rows(&pool, "medical_info", "student_id", gone), 0);
    assert_eq!(count_rows(&pool, "leave_requests", "student_id", gone), 0);

    assert_eq!(count_rows(&pool, "students", "id", kept), 1);
    assert_eq!(count_rows(&pool, "entry_logs", "student_id", kept), 2);
    assert_eq!(count_rows(&pool, "medical_info", "student_id", kept), 1);
    assert_eq!(count_rows(&pool, "leave_requests", "student_id", kept), 1);
}

#[test]
fn test_delete_missing_student_clears_orphans() {
    let mut pool = memory_pool();
    // rows pointing at a student that was never created
    populate_dependents(&pool, 77);

    let removed = students::delete_student(&mut pool.conn, 77).unwrap();

    assert!(!removed);
    assert_eq!(count_rows(&pool, "entry_logs", "student_id", 77), 0);
    assert_eq!(count_rows(&pool, "medical_info", "student_id", 77), 0);
    assert_eq!(count_rows(&pool, "leave_requests", "student_id", 77), 0);
}

#[test]
fn test_failed_delete_rolls_back_every_statement() {
    let mut pool = memory_pool();
    let id = students::add_student(&pool.conn, &student("Aarav Sharma", "CSE", 2)).unwrap();
    populate_dependents(&pool, id);

    // the last DELETE of the cascade now fails
    pool.conn.execute_batch("DROP TABLE medical_info;").unwrap();

    assert!(matches!(
        students::delete_student(&mut pool.conn, id),
        Err(rhostel::errors::AppError::Db(_))
    ));

    assert_eq!(count_rows(&pool, "students", "id", id), 1);
    assert_eq!(count_rows(&pool, "entry_logs", "student_id", id), 2);
    assert_eq!(count_rows(&pool, "leave_requests", "student_id", id), 1);
}
