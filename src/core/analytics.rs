//! Aggregations behind the dashboard charts.
//!
//! These work on full-table results in memory; the access layer itself
//! never groups or counts.

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::{entry_logs, leave_requests, students};
use crate::errors::AppResult;
use crate::models::{EntryLog, LeaveRequest, LeaveStatus, Student};
use crate::ui::charts::bar_chart;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW};
use std::collections::{BTreeMap, BTreeSet};

/// Count items per key, most frequent first; ties ordered by key.
pub fn count_by<T, K, F>(items: &[T], key: F) -> Vec<(K, usize)>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut counts: BTreeMap<K, usize> = BTreeMap::new();
    for item in items {
        *counts.entry(key(item)).or_insert(0) += 1;
    }

    let mut out: Vec<(K, usize)> = counts.into_iter().collect();
    // stable sort keeps the BTreeMap key order among equal counts
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

pub fn count_by_department(students: &[Student]) -> Vec<(String, usize)> {
    count_by(students, |s| s.dept.clone())
}

pub fn count_by_year(students: &[Student]) -> Vec<(i32, usize)> {
    count_by(students, |s| s.year)
}

pub fn count_by_leave_status(leaves: &[LeaveRequest]) -> Vec<(LeaveStatus, usize)> {
    count_by(leaves, |r| r.status.clone())
}

/// Headline metrics of the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_students: usize,
    pub total_logs: usize,
    pub currently_inside: usize,
    pub total_leaves: usize,
    pub pending_leaves: usize,
    pub approved_leaves: usize,
    pub rejected_leaves: usize,
    pub departments: usize,
}

impl DashboardSummary {
    pub fn build(students: &[Student], logs: &[EntryLog], leaves: &[LeaveRequest]) -> Self {
        let with_status = |status: LeaveStatus| leaves.iter().filter(|r| r.status == status).count();

        // a student counts once however many open stays are on record
        let inside: BTreeSet<i64> = logs
            .iter()
            .filter(|l| l.is_open())
            .map(|l| l.student_id)
            .collect();

        Self {
            total_students: students.len(),
            total_logs: logs.len(),
            currently_inside: inside.len(),
            total_leaves: leaves.len(),
            pending_leaves: with_status(LeaveStatus::Pending),
            approved_leaves: with_status(LeaveStatus::Approved),
            rejected_leaves: with_status(LeaveStatus::Rejected),
            departments: students
                .iter()
                .map(|s| s.dept.as_str())
                .collect::<BTreeSet<_>>()
                .len(),
        }
    }
}

fn labelled<K: ToString>(rows: Vec<(K, usize)>) -> Vec<(String, usize)> {
    rows.into_iter().map(|(k, c)| (k.to_string(), c)).collect()
}

fn metric(label: &str, value: usize, colour: &str) {
    println!("{}• {:<18}{} {}{}{}", CYAN, label, RESET, colour, value, RESET);
}

struct Snapshot {
    students: Vec<Student>,
    logs: Vec<EntryLog>,
    leaves: Vec<LeaveRequest>,
}

fn load(pool: &mut DbPool) -> AppResult<Snapshot> {
    Ok(Snapshot {
        students: students::list_students(&pool.conn)?,
        logs: entry_logs::list_logs(&pool.conn)?,
        leaves: leave_requests::list_leave_requests(&pool.conn)?,
    })
}

pub struct AnalyticsLogic;

impl AnalyticsLogic {
    /// Metrics plus the three charts: by department, by year, by leave status.
    pub fn print_dashboard(pool: &mut DbPool, cfg: &Config) -> AppResult<()> {
        let data = load(pool)?;
        header("🏨 Hostel Management Dashboard");

        if data.students.is_empty() {
            warning("No data available. Please add students.");
            return Ok(());
        }

        let summary = DashboardSummary::build(&data.students, &data.logs, &data.leaves);
        metric("Total students", summary.total_students, GREEN);
        metric("Total logs", summary.total_logs, GREEN);
        metric("Inside now", summary.currently_inside, GREEN);
        metric("Pending leaves", summary.pending_leaves, YELLOW);
        metric("Approved leaves", summary.approved_leaves, GREEN);
        println!();

        let width = cfg.chart_width;
        println!(
            "{}",
            bar_chart(
                "Students by Department",
                &count_by_department(&data.students),
                width
            )
        );
        println!(
            "{}",
            bar_chart(
                "Students by Year",
                &labelled(count_by_year(&data.students)),
                width
            )
        );
        if !data.leaves.is_empty() {
            println!(
                "{}",
                bar_chart(
                    "Leave Request Status",
                    &labelled(count_by_leave_status(&data.leaves)),
                    width
                )
            );
        }

        Ok(())
    }

    /// Totals and the department strength chart.
    pub fn print_analytics(pool: &mut DbPool, cfg: &Config) -> AppResult<()> {
        let data = load(pool)?;
        header("📊 Hostel Analytics");

        if data.students.is_empty() {
            warning("No data available for analytics.");
            return Ok(());
        }

        let summary = DashboardSummary::build(&data.students, &data.logs, &data.leaves);
        metric("Students", summary.total_students, GREEN);
        metric("Logs", summary.total_logs, GREEN);
        metric("Leaves", summary.total_leaves, GREEN);
        metric("Rejected leaves", summary.rejected_leaves, YELLOW);
        metric("Departments", summary.departments, GREEN);
        println!();

        println!(
            "{}",
            bar_chart(
                "Department Strength",
                &count_by_department(&data.students),
                cfg.chart_width
            )
        );
        Ok(())
    }
}
