//! Date utilities: the storage text formats and their parsers.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};

/// Storage format of `entry_logs.entry_time` / `exit_time`.
pub const DATETIME_FMT: &str = "%Y-%m-%d %H:%M:%S";

/// Storage format of `leave_requests.from_date` / `to_date`.
pub const DATE_FMT: &str = "%Y-%m-%d";

/// Accepted on input besides `DATETIME_FMT`.
const DATETIME_INPUT_FMTS: [&str; 4] = [
    DATETIME_FMT,
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Current local time truncated to whole seconds.
pub fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FMT).ok()
}

pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    DATETIME_INPUT_FMTS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

pub fn parse_date_arg(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

pub fn parse_optional_datetime(input: Option<&String>) -> AppResult<Option<NaiveDateTime>> {
    if let Some(s) = input {
        let dt = parse_datetime(s).ok_or_else(|| AppError::InvalidDateTime(s.to_string()))?;
        Ok(Some(dt))
    } else {
        Ok(None)
    }
}

pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format(DATETIME_FMT).to_string()
}

pub fn format_date(d: &NaiveDate) -> String {
    d.format(DATE_FMT).to_string()
}
