//! Row → model helpers shared by the table modules.
//!
//! Columns carry SQLite affinity only, so any storage class may turn up.
//! Decoding never fails on content: NULL reads as empty or zero, and text
//! that is not a valid date or timestamp reads as `None`.

use crate::models::LeaveStatus;
use crate::utils::date::{DATE_FMT, parse_datetime};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::types::ValueRef;
use rusqlite::{Result, Row};

pub(crate) fn text(row: &Row, col: &str) -> Result<String> {
    Ok(match row.get_ref(col)? {
        ValueRef::Null => String::new(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(b) | ValueRef::Blob(b) => String::from_utf8_lossy(b).into_owned(),
    })
}

/// Integer column; text that does not parse reads as 0.
pub(crate) fn int(row: &Row, col: &str) -> Result<i64> {
    Ok(match row.get_ref(col)? {
        ValueRef::Integer(i) => i,
        ValueRef::Real(f) => f as i64,
        ValueRef::Text(b) => String::from_utf8_lossy(b).trim().parse().unwrap_or(0),
        ValueRef::Null | ValueRef::Blob(_) => 0,
    })
}

pub(crate) fn opt_datetime(row: &Row, col: &str) -> Result<Option<NaiveDateTime>> {
    let s = text(row, col)?;
    if s.trim().is_empty() {
        return Ok(None);
    }
    Ok(parse_datetime(&s))
}

pub(crate) fn opt_date(row: &Row, col: &str) -> Result<Option<NaiveDate>> {
    let s = text(row, col)?;
    Ok(NaiveDate::parse_from_str(s.trim(), DATE_FMT).ok())
}

pub(crate) fn leave_status(row: &Row, col: &str) -> Result<LeaveStatus> {
    Ok(LeaveStatus::from_db_str(&text(row, col)?))
}
