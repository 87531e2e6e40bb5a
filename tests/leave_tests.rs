use chrono::NaiveDate;
use rhostel::core::leave::LeaveLogic;
use rhostel::db::{leave_requests, students};
use rhostel::errors::AppError;
use rhostel::models::LeaveStatus;

mod common;
use common::{memory_pool, student};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, d).unwrap()
}

#[test]
fn test_new_request_is_pending() {
    let pool = memory_pool();
    let id = leave_requests::add_leave_request(&pool.conn, 1, &day(13), &day(15), "Diwali").unwrap();

    let list = leave_requests::list_leave_requests(&pool.conn).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, id);
    assert_eq!(list[0].status, LeaveStatus::Pending);
    assert_eq!(list[0].from_date, Some(day(13)));
    assert_eq!(list[0].to_date, Some(day(15)));
    assert_eq!(list[0].reason, "Diwali");
    assert_eq!(list[0].days(), Some(3));
}

#[test]
fn test_reversed_dates_are_accepted() {
    let pool = memory_pool();
    let id = leave_requests::add_leave_request(&pool.conn, 1, &day(20), &day(18), "Oops").unwrap();

    let req = leave_requests::get_leave_request(&pool.conn, id).unwrap().unwrap();
    assert_eq!(req.from_date, Some(day(20)));
    assert_eq!(req.to_date, Some(day(18)));
    assert_eq!(req.days(), Some(0));
}

#[test]
fn test_approved_request_can_be_reopened() {
    let pool = memory_pool();
    let id = leave_requests::add_leave_request(&pool.conn, 1, &day(1), &day(2), "Home").unwrap();

    assert!(leave_requests::update_leave_status(&pool.conn, id, LeaveStatus::Approved).unwrap());
    assert!(leave_requests::update_leave_status(&pool.conn, id, LeaveStatus::Pending).unwrap());

    let req = leave_requests::get_leave_request(&pool.conn, id).unwrap().unwrap();
    assert_eq!(req.status, LeaveStatus::Pending);
}

#[test]
fn test_decided_request_cannot_flip_directly() {
    let pool = memory_pool();
    let id = leave_requests::add_leave_request(&pool.conn, 1, &day(1), &day(2), "Home").unwrap();
    leave_requests::update_leave_status(&pool.conn, id, LeaveStatus::Approved).unwrap();

    let err = leave_requests::update_leave_status(&pool.conn, id, LeaveStatus::Rejected).unwrap_err();
    match err {
        AppError::InvalidTransition { from, to } => {
            assert_eq!(from, "Approved");
            assert_eq!(to, "Rejected");
        }
        other => panic!("unexpected error: {other}"),
    }

    let req = leave_requests::get_leave_request(&pool.conn, id).unwrap().unwrap();
    assert_eq!(req.status, LeaveStatus::Approved);
}

#[test]
fn test_update_status_of_missing_request_is_a_noop() {
    let pool = memory_pool();
    let updated = leave_requests::update_leave_status(&pool.conn, 12, LeaveStatus::Approved).unwrap();
    assert!(!updated);
    assert!(leave_requests::list_leave_requests(&pool.conn).unwrap().is_empty());
}

#[test]
fn test_transition_rules() {
    use LeaveStatus::*;

    assert!(Pending.can_transition_to(&Approved));
    assert!(Pending.can_transition_to(&Rejected));
    assert!(Approved.can_transition_to(&Pending));
    assert!(Rejected.can_transition_to(&Pending));
    assert!(Approved.can_transition_to(&Approved));
    assert!(!Approved.can_transition_to(&Rejected));
    assert!(!Rejected.can_transition_to(&Approved));

    let odd = Unknown("On Hold".to_string());
    assert!(odd.can_transition_to(&Pending));
    assert!(odd.can_transition_to(&Rejected));
    assert!(!Pending.can_transition_to(&odd));
}

#[test]
fn test_status_from_input() {
    assert_eq!(LeaveStatus::from_input("approved").unwrap(), LeaveStatus::Approved);
    assert_eq!(LeaveStatus::from_input(" REJECTED ").unwrap(), LeaveStatus::Rejected);
    assert_eq!(LeaveStatus::from_input("Pending").unwrap(), LeaveStatus::Pending);
    assert!(matches!(
        LeaveStatus::from_input("maybe"),
        Err(AppError::InvalidStatus(s)) if s == "maybe"
    ));
    assert_eq!(
        LeaveStatus::from_db_str("approved"),
        LeaveStatus::Unknown("approved".to_string())
    );
    assert_eq!(LeaveStatus::from_db_str("Approved"), LeaveStatus::Approved);
}

#[test]
fn test_foreign_status_text_still_lists_and_can_be_reset() {
    let pool = memory_pool();
    for d in [1, 2, 3] {
        leave_requests::add_leave_request(&pool.conn, 1, &day(d), &day(d), "Home").unwrap();
    }
    // lower-case status written by an older client
    pool.conn
        .execute(
            "INSERT INTO leave_requests (student_id, from_date, to_date, reason, status)
             VALUES (1, '2025-11-04', '2025-11-05', 'Trip', 'approved')",
            [],
        )
        .unwrap();
    let odd = pool.conn.last_insert_rowid();

    let list = leave_requests::list_leave_requests(&pool.conn).unwrap();
    assert_eq!(list.len(), 4);
    assert_eq!(
        list.iter().filter(|r| r.status == LeaveStatus::Pending).count(),
        3
    );
    let req = list.iter().find(|r| r.id == odd).unwrap();
    assert_eq!(req.status, LeaveStatus::Unknown("approved".to_string()));
    assert_eq!(req.status.to_string(), "approved");

    assert!(leave_requests::update_leave_status(&pool.conn, odd, LeaveStatus::Pending).unwrap());
    let req = leave_requests::get_leave_request(&pool.conn, odd).unwrap().unwrap();
    assert_eq!(req.status, LeaveStatus::Pending);
}

#[test]
fn test_unknown_status_is_never_written() {
    let pool = memory_pool();
    let id = leave_requests::add_leave_request(&pool.conn, 1, &day(1), &day(1), "Home").unwrap();

    let err = leave_requests::update_leave_status(
        &pool.conn,
        id,
        LeaveStatus::Unknown("Escalated".to_string()),
    )
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidStatus(s) if s == "Escalated"));

    let req = leave_requests::get_leave_request(&pool.conn, id).unwrap().unwrap();
    assert_eq!(req.status, LeaveStatus::Pending);
}

#[test]
fn test_unreadable_dates_keep_the_row() {
    let pool = memory_pool();
    pool.conn
        .execute(
            "INSERT INTO leave_requests (student_id, from_date, to_date, reason)
             VALUES (2, 'next week', NULL, 'Unsure')",
            [],
        )
        .unwrap();

    let list = leave_requests::list_leave_requests(&pool.conn).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].from_date, None);
    assert_eq!(list[0].to_date, None);
    assert_eq!(list[0].days(), None);
    assert_eq!(list[0].status, LeaveStatus::Pending);
}

#[test]
fn test_submit_and_review_through_logic() {
    let mut pool = memory_pool();
    let sid = students::add_student(&pool.conn, &student("Karan Gupta", "IT", 2)).unwrap();

    assert!(matches!(
        LeaveLogic::submit(&mut pool, sid + 1, day(3), day(4), "x"),
        Err(AppError::StudentNotFound(_))
    ));

    let id = LeaveLogic::submit(&mut pool, sid, day(3), day(4), "Competition").unwrap();
    assert!(LeaveLogic::set_status(&mut pool, id, LeaveStatus::Rejected).unwrap());
    assert!(!LeaveLogic::set_status(&mut pool, id + 10, LeaveStatus::Approved).unwrap());

    let req = leave_requests::get_leave_request(&pool.conn, id).unwrap().unwrap();
    assert_eq!(req.status, LeaveStatus::Rejected);
}
