use serde::Serialize;

/// A row of the `medical_info` table, one per student.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MedicalInfo {
    pub student_id: i64,
    pub blood_group: String,
    pub allergies: String,
    pub conditions: String,
    pub emergency_contact: String,
}
