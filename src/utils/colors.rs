/// ANSI color helper utilities for terminal output.
use crate::models::LeaveStatus;
use ansi_term::Colour;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Colour used for a leave status everywhere it is printed:
/// green approved, amber pending, red rejected, grey for unknown text.
pub fn colour_for_leave_status(status: &LeaveStatus) -> Colour {
    match status {
        LeaveStatus::Approved => Colour::Green,
        LeaveStatus::Pending => Colour::RGB(245, 158, 11),
        LeaveStatus::Rejected => Colour::Red,
        LeaveStatus::Unknown(_) => Colour::Fixed(244),
    }
}

pub fn paint_leave_status(status: &LeaveStatus) -> String {
    colour_for_leave_status(status)
        .bold()
        .paint(status.to_db_str())
        .to_string()
}

/// Greys out empty placeholders ("" or "--"), leaves real values alone.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn colorize_in_out(value: &str, is_in: bool) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        return format!("{GREY}{value}{RESET}");
    }

    if is_in {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{RED}{value}{RESET}")
    }
}
