use crate::errors::{AppError, AppResult};
use serde::{Serialize, Serializer};
use std::fmt;

/// Review state of a leave request.
///
/// Only the three known states are ever written. `Unknown` carries any
/// other text found in the `status` column so that such rows still list
/// and can be reset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
    Unknown(String),
}

impl LeaveStatus {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
            LeaveStatus::Unknown(s) => s,
        }
    }

    /// Convert DB string → enum. Text outside the known states is kept as
    /// `Unknown`.
    pub fn from_db_str(s: &str) -> Self {
        match s {
            "Pending" => LeaveStatus::Pending,
            "Approved" => LeaveStatus::Approved,
            "Rejected" => LeaveStatus::Rejected,
            other => LeaveStatus::Unknown(other.to_string()),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, LeaveStatus::Unknown(_))
    }

    /// Helper: convert user input (any case) into a status.
    pub fn from_input(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(LeaveStatus::Pending),
            "approved" | "approve" => Ok(LeaveStatus::Approved),
            "rejected" | "reject" => Ok(LeaveStatus::Rejected),
            _ => Err(AppError::InvalidStatus(s.to_string())),
        }
    }

    /// Allowed moves:
    /// - Pending → Approved | Rejected (review)
    /// - Approved | Rejected → Pending (re-open)
    /// - any state → itself (no-op)
    /// - Unknown → any known state (repair)
    ///
    /// A decided request must be re-opened before it can be decided the
    /// other way. Nothing moves to `Unknown`.
    pub fn can_transition_to(&self, next: &LeaveStatus) -> bool {
        use LeaveStatus::*;
        match (self, next) {
            (_, Unknown(_)) => false,
            (Unknown(_), _) => true,
            (Pending, Approved) | (Pending, Rejected) => true,
            (Approved, Pending) | (Rejected, Pending) => true,
            (current, next) => current == next,
        }
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}

/// Exports carry the stored text, not a tagged enum.
impl Serialize for LeaveStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.to_db_str())
    }
}
