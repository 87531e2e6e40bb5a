use serde::Serialize;

/// A row of the `students` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub dept: String,
    pub year: i32,
    pub contact: String,
    pub guardian: String,
    pub guardian_contact: String,
    pub room_no: String,
}

/// Field values for a student that does not have an id yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub dept: String,
    pub year: i32,
    pub contact: String,
    pub guardian: String,
    pub guardian_contact: String,
    pub room_no: String,
}

/// Partial update: only the `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentUpdate {
    pub name: Option<String>,
    pub dept: Option<String>,
    pub year: Option<i32>,
    pub contact: Option<String>,
    pub guardian: Option<String>,
    pub guardian_contact: Option<String>,
    pub room_no: Option<String>,
}

impl StudentUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.dept.is_none()
            && self.year.is_none()
            && self.contact.is_none()
            && self.guardian.is_none()
            && self.guardian_contact.is_none()
            && self.room_no.is_none()
    }
}

impl Student {
    /// Label used in prompts and listings, e.g. `Aarav Sharma (ID 1)`.
    pub fn label(&self) -> String {
        format!("{} (ID {})", self.name, self.id)
    }
}
