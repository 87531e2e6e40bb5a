use crate::core::students::ensure_student;
use crate::db::medical;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::MedicalInfo;
use crate::ui::messages::{info, success};
use crate::utils::colors::{CYAN, RESET, colorize_optional};

pub struct MedicalLogic;

impl MedicalLogic {
    /// Save (insert or overwrite) the medical record of `info.student_id`.
    pub fn save(pool: &mut DbPool, info: &MedicalInfo) -> AppResult<()> {
        let student = ensure_student(&pool.conn, info.student_id)?;
        medical::upsert_medical_info(&pool.conn, info)?;
        success(format!("Medical info saved for {}.", student.label()));
        Ok(())
    }

    pub fn show(pool: &mut DbPool, student_id: i64) -> AppResult<Option<MedicalInfo>> {
        let student = ensure_student(&pool.conn, student_id)?;

        let Some(record) = medical::get_medical_info(&pool.conn, student_id)? else {
            info(format!("No medical info recorded for {}.", student.label()));
            return Ok(None);
        };

        println!("💊 Medical information for {}\n", student.label());
        for (label, value) in [
            ("Blood group", &record.blood_group),
            ("Allergies", &record.allergies),
            ("Conditions", &record.conditions),
            ("Emergency contact", &record.emergency_contact),
        ] {
            println!("{}• {:<18}{} {}", CYAN, label, RESET, colorize_optional(value));
        }

        Ok(Some(record))
    }
}
